//! Domain-critical regression tests for dot-render.
//!
//! These tests pin the observable behavior of a render end to end. Each
//! test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{DotRenderer, RenderError, RenderParams};
    use crate::color::Rgb;
    use crate::preprocess::MAX_DIMENSION;
    use crate::raster::RasterImage;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RasterImage {
        RasterImage::filled(width, height, [rgb[0], rgb[1], rgb[2], 255]).unwrap()
    }

    // ========================================================================
    // Output size: the working raster is rendered as it is
    // ========================================================================

    /// If this breaks, it means: the output no longer has the working
    /// raster's dimensions.
    #[test]
    fn test_output_keeps_working_size() {
        for (w, h) in [(1, 1), (640, 640), (640, 1), (7, 640), (640, 213), (123, 45)] {
            let out = DotRenderer::new().render(&solid(w, h, [128, 128, 128])).unwrap();
            assert_eq!((out.width(), out.height()), (w, h));
        }
    }

    /// If this breaks, it means: an unreduced upload reaches the grid code
    /// and renders at full size (slow, huge PNGs).
    #[test]
    fn test_raster_above_working_size_is_rejected() {
        for (w, h) in [(641, 480), (1000, 500), (500, 1000), (3000, 7)] {
            let err = DotRenderer::new().render(&solid(w, h, [0, 0, 0])).unwrap_err();
            assert!(matches!(err, RenderError::InvalidInput(_)), "{w}x{h}");
        }
        assert_eq!(MAX_DIMENSION, 640);
    }

    /// If this breaks, it means: the grid at the largest working size
    /// changed shape.
    #[test]
    fn test_largest_working_raster_grid() {
        let out = DotRenderer::new().render(&solid(640, 640, [0, 0, 0])).unwrap();
        // floor(640 / 16) = 40 cells per axis
        assert_eq!(out.dots().len(), 40 * 40);
    }

    // ========================================================================
    // Radius policy: dark -> large, light -> minimum
    // ========================================================================

    /// If this breaks, it means: the brightness-to-radius mapping is no
    /// longer inverse, or the upper clamp is lost.
    #[test]
    fn test_black_input_uses_full_radius() {
        let image = solid(100, 100, [0, 0, 0]);
        let out = DotRenderer::new().render(&image).unwrap();
        assert!(!out.dots().is_empty());
        for dot in out.dots() {
            assert_eq!(dot.radius, 6.0, "dot at ({}, {})", dot.row, dot.col);
        }
    }

    /// If this breaks, it means: white areas lose their dots entirely or
    /// the `max(0.5, r * 0.1)` floor changed.
    #[test]
    fn test_white_input_uses_min_radius() {
        for radius in [2.0, 6.0, 20.0] {
            let params = RenderParams {
                dot_radius: radius,
                ..Default::default()
            };
            let image = solid(100, 100, [255, 255, 255]);
            let out = DotRenderer::with_params(params).render(&image).unwrap();
            let expected = (radius * 0.1).max(0.5);
            for dot in out.dots() {
                assert!(
                    (dot.radius - expected).abs() < 1e-12,
                    "radius {radius}: got {}, expected {expected}",
                    dot.radius
                );
            }
        }
    }

    // ========================================================================
    // Grid size
    // ========================================================================

    /// If this breaks, it means: the cell step formula `2r + spacing`
    /// changed, or the floor became a round.
    #[test]
    fn test_reference_grid_is_six_by_six() {
        let image = solid(100, 100, [50, 50, 50]);
        let out = DotRenderer::new().dot_radius(6.0).spacing(4.0).render(&image).unwrap();
        assert_eq!(out.dots().len(), 36);
        let max_row = out.dots().iter().map(|d| d.row).max().unwrap();
        let max_col = out.dots().iter().map(|d| d.col).max().unwrap();
        assert_eq!((max_row, max_col), (5, 5));
    }

    // ========================================================================
    // Overlap between neighbouring cells
    // ========================================================================

    /// If this breaks, it means: dots are clipped to their own cell, or a
    /// cell repaints its background over the previous dot.
    #[test]
    fn test_dot_spills_into_next_cell() {
        // Step 10.5 over 32 pixels: three columns with pixel ranges 0..10,
        // 10..21 and 21..32, so the first dot (centre 5, radius 5.25)
        // reaches a quarter into pixel 10 of the second cell.
        let out = DotRenderer::new()
            .dot_radius(5.25)
            .spacing(0.0)
            .dot_color(Rgb::BLACK)
            .background_color(Rgb::WHITE)
            .render(&solid(32, 10, [0, 0, 0]))
            .unwrap();

        let first = out.dots()[0];
        assert_eq!((first.center_x, first.radius), (5.0, 5.25));
        assert!(first.center_x + first.radius > 10.0);

        // White, then a quarter from the first dot (191), then three
        // quarters from the second (48). The second dot alone would give 64.
        assert_eq!(out.pixel(10, 5), [48, 48, 48, 255]);
    }

    /// If this breaks, it means: dots are no longer drawn in row-major
    /// order, so a different dot ends up on top where neighbours overlap.
    #[test]
    fn test_dots_are_drawn_row_major() {
        let out = DotRenderer::new().render(&solid(48, 32, [0, 0, 0])).unwrap();
        let order: Vec<(u32, u32)> = out.dots().iter().map(|d| (d.row, d.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    // ========================================================================
    // Colors
    // ========================================================================

    /// If this breaks, it means: flat dot color is being tinted by the
    /// source, or fully covered pixels are blended.
    #[test]
    fn test_flat_dot_color_is_exact() {
        let dot_color = Rgb::new(0x9f, 0xe4, 0xd0);
        let image = solid(100, 100, [0, 0, 0]);
        let out = DotRenderer::new().dot_color(dot_color).render(&image).unwrap();

        for dot in out.dots() {
            assert_eq!(dot.color, dot_color);
            let [r, g, b, a] = out.pixel(dot.center_x as u32, dot.center_y as u32);
            assert_eq!([r, g, b], dot_color.to_bytes());
            assert_eq!(a, 255);
        }
    }

    /// If this breaks, it means: source colors are sampled from the wrong
    /// cell or are truncated instead of rounded.
    #[test]
    fn test_source_color_matches_cell_mean() {
        // Four 16x16 quadrants, one cell each with the default step of 16.
        let quadrants = [[200, 30, 30], [30, 200, 30], [30, 30, 200], [90, 90, 90]];
        let mut data = Vec::with_capacity(32 * 32 * 4);
        for y in 0..32u32 {
            for x in 0..32u32 {
                let q = quadrants[((y / 16) * 2 + x / 16) as usize];
                data.extend_from_slice(&[q[0], q[1], q[2], 255]);
            }
        }
        let image = RasterImage::from_rgba(32, 32, data).unwrap();
        let out = DotRenderer::new().use_source_color(true).render(&image).unwrap();

        assert_eq!(out.dots().len(), 4);
        for dot in out.dots() {
            let q = quadrants[(dot.row * 2 + dot.col) as usize];
            assert_eq!(dot.color.to_bytes(), q);
            let [r, g, b, _] = out.pixel(dot.center_x as u32, dot.center_y as u32);
            assert_eq!([r, g, b], q);
        }
    }

    /// If this breaks, it means: mean color rounding drifted by more than
    /// one step per channel.
    #[test]
    fn test_source_color_gradient_within_one() {
        let (w, h) = (48u32, 16u32);
        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for _ in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[(x * 5) as u8, 100, (255 - x * 5) as u8, 255]);
            }
        }
        let image = RasterImage::from_rgba(w, h, data).unwrap();
        let out = DotRenderer::new().use_source_color(true).render(&image).unwrap();

        assert_eq!(out.dots().len(), 3);
        for dot in out.dots() {
            let xs = dot.col * 16..(dot.col + 1) * 16;
            let mean_r = xs.clone().map(|x| (x * 5) as f64).sum::<f64>() / 16.0;
            let mean_b = xs.map(|x| (255 - x * 5) as f64).sum::<f64>() / 16.0;
            assert!((dot.color.r as f64 - mean_r).abs() <= 1.0);
            assert_eq!(dot.color.g, 100);
            assert!((dot.color.b as f64 - mean_b).abs() <= 1.0);
        }
    }

    // ========================================================================
    // Purity
    // ========================================================================

    /// If this breaks, it means: rendering picked up hidden state or
    /// randomness.
    #[test]
    fn test_render_is_idempotent() {
        let mut data = Vec::new();
        for i in 0..(73u32 * 41) {
            let v = (i.wrapping_mul(2654435761) >> 24) as u8;
            data.extend_from_slice(&[v, v.wrapping_mul(3), v ^ 0x5a, 255]);
        }
        let image = RasterImage::from_rgba(73, 41, data).unwrap();
        let renderer = DotRenderer::new().dot_radius(3.0).spacing(1.0).use_source_color(true);

        let a = renderer.render(&image).unwrap();
        let b = renderer.render(&image).unwrap();
        assert_eq!(a.as_rgba(), b.as_rgba());
        assert_eq!(a.dots(), b.dots());
    }

    // ========================================================================
    // Degenerate inputs
    // ========================================================================

    /// If this breaks, it means: single-pixel images hang, divide by zero,
    /// or lose their only dot.
    #[test]
    fn test_single_pixel_image_yields_one_dot() {
        let dark = DotRenderer::new().render(&solid(1, 1, [0, 0, 0])).unwrap();
        assert_eq!(dark.dots().len(), 1);
        assert_eq!(dark.dots()[0].radius, 6.0);
        assert_eq!((dark.dots()[0].center_x, dark.dots()[0].center_y), (0.5, 0.5));

        let light = DotRenderer::new().render(&solid(1, 1, [255, 255, 255])).unwrap();
        assert_eq!(light.dots().len(), 1);
        assert!((light.dots()[0].radius - 0.6).abs() < 1e-12);
    }

    /// If this breaks, it means: a dot larger than the raster is no longer
    /// clipped and the renderer writes out of bounds.
    #[test]
    fn test_dot_larger_than_raster_is_clipped() {
        let dot_color = Rgb::new(1, 2, 3);
        let out = DotRenderer::new()
            .dot_color(dot_color)
            .render(&solid(4, 4, [0, 0, 0]))
            .unwrap();
        assert!(out
            .as_rgba()
            .chunks_exact(4)
            .all(|p| p == [1, 2, 3, 255]));
    }

    /// If this breaks, it means: empty rasters reach the grid code.
    #[test]
    fn test_zero_dimension_is_invalid_input() {
        for (w, h) in [(0, 0), (0, 10), (10, 0)] {
            let err = RasterImage::from_rgba(w, h, Vec::new()).unwrap_err();
            assert!(matches!(err, RenderError::InvalidInput(_)), "{w}x{h}");
        }
    }

    /// If this breaks, it means: the output is not fully opaque and PNG
    /// export would leak transparency.
    #[test]
    fn test_output_is_opaque() {
        let image = RasterImage::filled(30, 20, [10, 200, 90, 0]).unwrap();
        let out = DotRenderer::new().dot_radius(2.0).render(&image).unwrap();
        assert!(out.as_rgba().chunks_exact(4).all(|p| p[3] == 255));
    }
}
