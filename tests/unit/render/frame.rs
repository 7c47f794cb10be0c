use super::*;

fn one_px(rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: rgba.to_vec(),
    }
}

#[test]
fn transparent_pixel_flattens_to_background() {
    let out = one_px([0, 0, 0, 0]).to_opaque_rgba8([10, 20, 30, 255]).unwrap();
    assert_eq!(out, vec![10, 20, 30, 255]);
}

#[test]
fn opaque_pixel_is_unchanged() {
    let out = one_px([1, 2, 3, 255]).to_opaque_rgba8([10, 20, 30, 255]).unwrap();
    assert_eq!(out, vec![1, 2, 3, 255]);
}

#[test]
fn half_covered_pixel_blends_with_background() {
    // Premultiplied 50% red over white.
    let out = one_px([128, 0, 0, 128]).to_opaque_rgba8([255, 255, 255, 255]).unwrap();
    assert_eq!(out, vec![255, 127, 127, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(one_px([0, 0, 0, 0]).flatten_into(&mut dst, [0, 0, 0, 255]).is_err());
}
