use super::*;

fn ramp() -> HdrImage {
    let mut rgb = Vec::new();
    for y in 0..8u32 {
        for x in 0..8u32 {
            let v = (x + 8 * y) as f32 / 16.0;
            rgb.extend_from_slice(&[v, v * 0.5, 4.0 - v]);
        }
    }
    HdrImage::from_rgb(8, 8, rgb).unwrap()
}

#[test]
fn srgb_curve_endpoints_and_knee() {
    assert_eq!(linear_to_srgb(0.0), 0.0);
    assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    assert_eq!(linear_to_srgb(5.0), linear_to_srgb(1.0));
    assert_eq!(linear_to_srgb(-1.0), 0.0);
    assert_eq!(linear_to_srgb(f32::NAN), 0.0);
    assert_eq!(linear_to_srgb(f32::INFINITY), 1.0);
    assert_eq!(linear_to_srgb(f32::NEG_INFINITY), 0.0);
    assert!((linear_to_srgb(0.002) - 0.02584).abs() < 1e-5);
    assert!((linear_to_srgb(0.18) - 0.4614).abs() < 1e-3);
}

#[test]
fn exposure_is_in_stops() {
    assert_eq!(apply_exposure(1.0, 0.0), 1.0);
    assert!((apply_exposure(1.0, 1.0) - 2.0).abs() < 1e-6);
    assert!((apply_exposure(1.0, -3.0) - 0.125).abs() < 1e-7);
}

#[test]
fn rgb8_applies_exposure_before_curve() {
    let img = HdrImage::from_rgb(1, 1, vec![0.5, 0.25, 2.0]).unwrap();
    assert_eq!(tonemap_rgb8(&img, 1.0), vec![255, 188, 255]);
    assert_eq!(tonemap_rgb8(&img, 0.0), vec![188, 137, 255]);
}

#[test]
fn infinite_and_overflowing_values_saturate() {
    let img = HdrImage::from_rgb(1, 1, vec![f32::INFINITY, 1e30, 0.0]).unwrap();
    assert_eq!(tonemap_rgb8(&img, 0.0), vec![255, 255, 0]);

    let img = HdrImage::from_rgb(1, 1, vec![1e30, 1.0, 0.0]).unwrap();
    assert_eq!(tonemap_rgb8(&img, 200.0), vec![255, 255, 0]);

    let img = HdrImage::from_rgb(1, 1, vec![f32::NEG_INFINITY, f32::NAN, 0.5]).unwrap();
    assert_eq!(tonemap_rgb8(&img, 0.0), vec![0, 0, 188]);
}

#[test]
fn tonemap_is_deterministic() {
    let img = ramp();
    let a = tonemap(&img, -1.5, DEFAULT_JPEG_QUALITY).unwrap();
    let b = tonemap(&img, -1.5, DEFAULT_JPEG_QUALITY).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.size, ImageSize::new(8, 8));
    assert_eq!(&a.jpeg[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory(&a.jpeg).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn exposure_changes_output() {
    let img = ramp();
    let a = tonemap(&img, 0.0, 80).unwrap();
    let b = tonemap(&img, 2.0, 80).unwrap();
    assert_ne!(a.jpeg, b.jpeg);
}
