use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use skyboxer::{
    Error, FaceName, ImageEncoding, SplitParams, decode_source, split_skybox_to_dir,
    split_source_to_dir,
};

/// Gradient image whose pixels vary with position so crops can be compared exactly.
fn cross_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 251) as u8, (y % 241) as u8, ((x + y) % 13) as u8, 255 - (y % 5) as u8])
    })
}

fn write_fixture(dir: &Path, name: &str, image: &RgbaImage, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    let dynamic = match format {
        ImageFormat::Jpeg => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image.clone()).to_rgb8())
        }
        _ => DynamicImage::ImageRgba8(image.clone()),
    };
    dynamic.save_with_format(&path, format).unwrap();
    path
}

#[test]
fn png_cross_produces_six_exact_faces() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let source = cross_image(800, 600);
    let input = write_fixture(input_dir.path(), "skybox.png", &source, ImageFormat::Png);

    let report = split_skybox_to_dir(&input, out_dir.path(), &SplitParams::default()).unwrap();

    assert_eq!(report.encoding, ImageEncoding::Png);
    assert_eq!((report.face_width, report.face_height), (200, 200));
    assert_eq!(report.faces.len(), 6);

    for face in &report.faces {
        assert_eq!(face.file, out_dir.path().join(format!("{}.png", face.name)));
        let decoded = image::open(&face.file).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (200, 200));
        for (lx, ly, pixel) in decoded.enumerate_pixels() {
            assert_eq!(pixel, source.get_pixel(face.origin_x + lx, face.origin_y + ly));
        }
    }

    let pos_x = image::open(out_dir.path().join("posX.png")).unwrap().to_rgba8();
    assert_eq!(pos_x.get_pixel(0, 0), source.get_pixel(400, 200));
    assert_eq!(pos_x.get_pixel(199, 199), source.get_pixel(599, 399));
}

#[test]
fn output_files_are_named_after_faces() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        input_dir.path(),
        "cross.png",
        &cross_image(40, 30),
        ImageFormat::Png,
    );

    split_skybox_to_dir(&input, out_dir.path(), &SplitParams::default()).unwrap();

    let mut names: Vec<String> = std::fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        ["negX.png", "negY.png", "negZ.png", "posX.png", "posY.png", "posZ.png"]
    );
}

#[test]
fn jpeg_input_is_written_as_jpeg() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    // Content is detected from the bytes, not the misleading extension
    let input = write_fixture(
        input_dir.path(),
        "skybox.dat",
        &cross_image(96, 72),
        ImageFormat::Jpeg,
    );

    let report = split_skybox_to_dir(&input, out_dir.path(), &SplitParams::default()).unwrap();

    assert_eq!(report.encoding, ImageEncoding::Jpeg);
    for name in FaceName::ALL {
        let path = out_dir.path().join(format!("{name}.jpg"));
        assert_eq!(image::image_dimensions(&path).unwrap(), (24, 24));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }
}

#[test]
fn uneven_source_drops_remainder() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        input_dir.path(),
        "odd.png",
        &cross_image(801, 602),
        ImageFormat::Png,
    );

    let params = SplitParams {
        parallel: false,
        ..Default::default()
    };
    let report = split_skybox_to_dir(&input, out_dir.path(), &params).unwrap();

    assert_eq!((report.face_width, report.face_height), (200, 200));
    assert_eq!((report.excluded_columns, report.excluded_rows), (1, 2));
    for face in &report.faces {
        assert!(face.origin_x + report.face_width <= 800);
        assert!(face.origin_y + report.face_height <= 600);
    }
}

#[test]
fn manifest_lists_every_face() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        input_dir.path(),
        "skybox.png",
        &cross_image(80, 60),
        ImageFormat::Png,
    );

    let params = SplitParams {
        write_manifest: true,
        ..Default::default()
    };
    split_skybox_to_dir(&input, out_dir.path(), &params).unwrap();

    let json = std::fs::read_to_string(out_dir.path().join("skybox.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(manifest["face_width"], 20);
    assert_eq!(manifest["encoding"], "Png");
    let faces = manifest["faces"].as_array().unwrap();
    let names: Vec<&str> = faces.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["posY", "negX", "negZ", "negY", "posX", "posZ"]);
    assert!(manifest["generated"].is_string());
}

#[test]
fn undersized_source_fails_without_output() {
    let out_dir = tempfile::tempdir().unwrap();
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(RgbaImage::new(3, 3))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    let source = decode_source(&bytes).unwrap();

    let result = split_source_to_dir(&source, out_dir.path(), &SplitParams::default());
    assert!(matches!(result, Err(Error::SourceTooSmall { width: 3, height: 3 })));
    assert_eq!(std::fs::read_dir(out_dir.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_faces_are_reported_together() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        input_dir.path(),
        "skybox.png",
        &cross_image(40, 30),
        ImageFormat::Png,
    );
    // A directory squatting on a face's file name makes only that face fail
    std::fs::create_dir(out_dir.path().join("negZ.png")).unwrap();

    let result = split_skybox_to_dir(&input, out_dir.path(), &SplitParams::default());
    match result {
        Err(Error::FacesFailed(failures)) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].0, FaceName::NegZ);
        }
        other => panic!("expected FacesFailed, got {other:?}"),
    }
    for name in ["posY", "negX", "negY", "posX", "posZ"] {
        assert!(out_dir.path().join(format!("{name}.png")).is_file());
    }
}

#[cfg(unix)]
#[test]
fn failed_face_encode_is_reported() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        input_dir.path(),
        "skybox.png",
        &cross_image(40, 30),
        ImageFormat::Png,
    );
    // The file opens fine but every write to it fails with ENOSPC
    std::os::unix::fs::symlink("/dev/full", out_dir.path().join("posX.png")).unwrap();

    let result = split_skybox_to_dir(&input, out_dir.path(), &SplitParams::default());
    match result {
        Err(Error::FacesFailed(failures)) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].0, FaceName::PosX);
        }
        other => panic!("expected FacesFailed, got {other:?}"),
    }
    for name in ["posY", "negX", "negZ", "negY", "posZ"] {
        let decoded = image::open(out_dir.path().join(format!("{name}.png"))).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 10));
    }
}
