use std::fs;
use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use cropcenter::{
    CropParams, Error, ErrorKind, ItemOutcome, process_directory_to_path, process_file_to_buffer,
    write_batch_report,
};

fn write_gray(path: &Path, width: u32, height: u32, lit: &[(u32, u32, u8)]) {
    let mut img = GrayImage::new(width, height);
    for &(x, y, v) in lit {
        img.put_pixel(x, y, Luma([v]));
    }
    img.save(path).unwrap();
}

fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn batch_skips_non_png_and_survives_shape_errors() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("centered");

    write_gray(&input.path().join("one.png"), 20, 20, &[(3, 4, 200), (5, 6, 90)]);
    write_gray(&input.path().join("two.png"), 12, 30, &[(11, 29, 255)]);
    // content spans 16 columns, wider than the 10 column canvas
    write_gray(&input.path().join("wide.png"), 16, 4, &[(0, 1, 9), (15, 2, 9)]);
    fs::write(input.path().join("labels.csv"), "one,1\n").unwrap();

    let params = CropParams::new(10, 10);
    let report = process_directory_to_path(input.path(), &out_dir, &params, true).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.errors, 1);
    assert_eq!(report.skipped, 1);
    assert!(report.finished_at.is_some());
    assert_eq!(output_names(&out_dir), vec!["one.png", "two.png"]);

    let failure = report.failures().next().unwrap();
    assert_eq!(failure.file_name, "wide.png");
    match &failure.outcome {
        ItemOutcome::Failed { kind, message } => {
            assert_eq!(*kind, ErrorKind::Shape);
            assert!(message.contains("width"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let centered = image::open(out_dir.join("one.png")).unwrap();
    assert_eq!(centered.color(), image::ColorType::L8);
    let centered = centered.into_luma8();
    assert_eq!(centered.dimensions(), (10, 10));
    let lit: Vec<u8> = centered.pixels().map(|p| p.0[0]).filter(|&v| v != 0).collect();
    assert_eq!(lit, vec![200, 90]);
}

#[test]
fn fail_fast_returns_the_first_error() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_gray(&input.path().join("a.png"), 8, 8, &[(0, 0, 1), (7, 7, 1)]);
    write_gray(&input.path().join("b.png"), 8, 8, &[(4, 4, 1)]);

    let params = CropParams::new(6, 6);
    let err = process_directory_to_path(input.path(), output.path(), &params, false).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { axis: "height", input: 8, output: 6 }));
    assert!(output_names(output.path()).is_empty());
}

#[test]
fn directory_without_png_files_aborts_before_processing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("image.jpg"), b"").unwrap();

    let err = process_directory_to_path(input.path(), output.path(), &CropParams::new(28, 28), true)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn zero_sized_canvas_is_rejected_up_front() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_gray(&input.path().join("a.png"), 4, 4, &[(1, 1, 1)]);

    let err = process_directory_to_path(input.path(), output.path(), &CropParams::new(0, 28), true)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "out_height", .. }));
}

#[test]
fn undecodable_and_color_files_are_recorded_per_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_gray(&input.path().join("good.png"), 5, 5, &[(2, 2, 77)]);
    fs::write(input.path().join("corrupt.png"), b"not an image").unwrap();
    image::RgbImage::new(5, 5)
        .save(input.path().join("color.png"))
        .unwrap();

    let report =
        process_directory_to_path(input.path(), output.path(), &CropParams::new(8, 8), true)
            .unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 2);

    let kinds: Vec<(String, ErrorKind)> = report
        .failures()
        .map(|item| match &item.outcome {
            ItemOutcome::Failed { kind, .. } => (item.file_name.clone(), *kind),
            ItemOutcome::Processed { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("color.png".to_string(), ErrorKind::Shape),
            ("corrupt.png".to_string(), ErrorKind::Decode),
        ]
    );
    assert_eq!(output_names(output.path()), vec!["good.png"]);
}

#[test]
fn invert_flag_handles_dark_ink_on_white() {
    let input = tempfile::tempdir().unwrap();
    let path = input.path().join("ink.png");
    let mut page = GrayImage::from_pixel(16, 16, Luma([255]));
    for y in 5..8 {
        for x in 9..11 {
            page.put_pixel(x, y, Luma([0]));
        }
    }
    page.save(&path).unwrap();

    let mut params = CropParams::new(7, 7);
    params.invert_image = true;
    let centered = process_file_to_buffer(&path, &params).unwrap();
    assert_eq!(
        (
            centered.bounding_box.top,
            centered.bounding_box.bottom,
            centered.bounding_box.left,
            centered.bounding_box.right
        ),
        (5, 8, 9, 11)
    );
    assert_eq!(centered.canvas.iter().filter(|&&v| v == 255).count(), 6);
    assert_eq!(centered.canvas.iter().filter(|&&v| v == 0).count(), 49 - 6);

    // without inversion the white page is all content and cannot fit
    let err = process_file_to_buffer(&path, &CropParams::new(7, 7)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn sixteen_bit_input_is_cropped_and_narrowed() {
    let input = tempfile::tempdir().unwrap();
    let path = input.path().join("deep.png");
    let mut img = ImageBuffer::<Luma<u16>, Vec<u16>>::new(6, 6);
    img.put_pixel(2, 3, Luma([180]));
    img.save(&path).unwrap();

    let centered = process_file_to_buffer(&path, &CropParams::new(3, 3)).unwrap();
    assert_eq!(centered.canvas[[1, 1]], 180);
    assert_eq!(centered.canvas.iter().filter(|&&v| v != 0).count(), 1);
}

#[test]
fn report_round_trips_through_json_file() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_gray(&input.path().join("a.png"), 4, 4, &[(1, 2, 3)]);

    let report =
        process_directory_to_path(input.path(), output.path(), &CropParams::new(5, 5), true)
            .unwrap();
    let report_path = output.path().join("report.json");
    write_batch_report(&report, &report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["processed"], 1);
    assert_eq!(json["items"][0]["file_name"], "a.png");
    assert_eq!(json["items"][0]["status"], "processed");
    assert_eq!(json["items"][0]["bounding_box"]["top"], 2);
    assert_eq!(json["items"][0]["bounding_box"]["left"], 1);
}
