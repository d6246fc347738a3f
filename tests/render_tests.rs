#[cfg(test)]
mod render_proptests {
    use proptest::prelude::*;

    use qrdeco::render::{Layout, Zone, ZoneGrid};
    use qrdeco::{render_qr_code, ECLevel, LogoHitTest, ModuleMatrix, Primitive, RenderConfig};

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    pub fn hit_test_strategy() -> BoxedStrategy<LogoHitTest> {
        prop_oneof![Just(LogoHitTest::CornerPoint), Just(LogoHitTest::CellOverlap)].boxed()
    }

    prop_compose! {
        fn config_strategy()(
            size in 100u32..=600,
            logo_frac in 0.0f64..0.4,
            logo_padding in 0u32..=12,
            logo_border_width in 0u32..=4,
            ec_level in ec_level_strategy(),
            logo_hit_test in hit_test_strategy(),
        ) -> RenderConfig {
            let size = size as f64;
            RenderConfig {
                size,
                logo_size: (size * logo_frac).floor(),
                logo_padding: logo_padding as f64,
                logo_border_width: logo_border_width as f64,
                ec_level,
                logo_hit_test,
                ..Default::default()
            }
        }
    }

    fn masked_cells(matrix: &ModuleMatrix, config: &RenderConfig) -> usize {
        let layout = Layout::new(matrix.width(), config).unwrap();
        ZoneGrid::classify(matrix, &layout).unwrap().count_masked()
    }

    proptest! {
        #[test]
        fn proptest_deterministic(data in "[ -~]{1,120}", config in config_strategy()) {
            let a = render_qr_code(&data, &config).unwrap();
            let b = render_qr_code(&data, &config).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn proptest_three_eyes(data in "[ -~]{1,120}", config in config_strategy()) {
            let prims = render_qr_code(&data, &config).unwrap();
            let eyes = prims
                .iter()
                .filter_map(|p| match p {
                    Primitive::EyeMarker(e) => Some(e),
                    _ => None,
                })
                .collect::<Vec<_>>();
            prop_assert_eq!(eyes.len(), 3);
            for eye in eyes {
                let [outer, ring, pupil] = eye.circles();
                prop_assert_eq!(outer.0.r, eye.outer_radius);
                prop_assert!((ring.0.r / outer.0.r - 0.8).abs() < 1e-5);
                prop_assert!((pupil.0.r / outer.0.r - 0.5).abs() < 1e-5);
                prop_assert_eq!((outer.1, ring.1, pupil.1), (config.foreground, config.background, config.foreground));
            }
        }

        #[test]
        fn proptest_data_cells_avoid_eyes_and_logo(data in "[ -~]{1,120}", config in config_strategy()) {
            let matrix = ModuleMatrix::encode(&data, config.ec_level).unwrap();
            let layout = Layout::new(matrix.width(), &config).unwrap();
            let grid = ZoneGrid::classify(&matrix, &layout).unwrap();
            let mask = layout.mask_rect();
            let (lo, hi) = layout.logo_bounds();
            let eye_boxes = layout.eye_boxes();
            let eps = layout.cell_size() * 1e-3;

            for (row, col, zone) in grid.iter() {
                if zone != Zone::Data {
                    continue;
                }
                let cell = layout.cell_rect(row, col);
                let shrunk = qrdeco::render::Rect::new(cell.x + eps, cell.y + eps, cell.w - 2.0 * eps, cell.h - 2.0 * eps);
                for b in &eye_boxes {
                    prop_assert!(!shrunk.intersects(b), "data cell ({}, {}) inside eye box", row, col);
                }
                match config.logo_hit_test {
                    LogoHitTest::CornerPoint => {
                        let inside = (lo..=hi).contains(&cell.x) && (lo..=hi).contains(&cell.y);
                        prop_assert!(!inside, "data cell ({}, {}) has its corner in the logo zone", row, col);
                    }
                    LogoHitTest::CellOverlap => prop_assert!(!shrunk.intersects(&mask)),
                }
            }
        }

        #[test]
        fn proptest_dots_only_on_data_cells(data in "[ -~]{1,120}", config in config_strategy()) {
            let matrix = ModuleMatrix::encode(&data, config.ec_level).unwrap();
            let layout = Layout::new(matrix.width(), &config).unwrap();
            let grid = ZoneGrid::classify(&matrix, &layout).unwrap();
            let prims = qrdeco::render_matrix(&matrix, &config).unwrap();
            let dots = prims.iter().filter(|p| matches!(p, Primitive::Dot(_))).count();
            prop_assert_eq!(dots, grid.count(Zone::Data));
        }

        #[test]
        fn proptest_monotonic_masking(a in 0u32..=120, b in 0u32..=120) {
            let (small, large) = (a.min(b) as f64, a.max(b) as f64);
            let matrix = ModuleMatrix::encode("https://example.com", ECLevel::H).unwrap();
            let small_cfg = RenderConfig { logo_size: small, ..Default::default() };
            let large_cfg = RenderConfig { logo_size: large, ..Default::default() };
            let (m_small, m_large) = (masked_cells(&matrix, &small_cfg), masked_cells(&matrix, &large_cfg));

            prop_assert!(m_small <= m_large);
            // Each edge moves out by at least one full cell
            let cell = 200.0 / matrix.width() as f64;
            if large - small >= 2.0 * cell + 1.0 {
                prop_assert!(m_small < m_large);
            }
        }
    }
}

#[cfg(test)]
mod render_tests {
    use image::Rgba;
    use rayon::prelude::*;
    use test_case::test_case;

    use qrdeco::render::{Layout, Zone, ZoneGrid};
    use qrdeco::{
        render_qr_code, ECLevel, LogoHitTest, ModuleMatrix, ModuleSource, Primitive, QRBuilder,
        QRError, RenderConfig,
    };

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_example_eye_centers() {
        let prims = render_qr_code("https://example.com", &RenderConfig::default()).unwrap();
        let n = ModuleMatrix::encode("https://example.com", ECLevel::H).unwrap().width();
        let cell = 200.0 / n as f64;
        let r = 7.0 * cell / 2.0;

        let centers = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::EyeMarker(e) => Some((e.cx, e.cy, e.outer_radius)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(centers, vec![(r, r, r), (200.0 - r, r, r), (r, 200.0 - r, r)]);
    }

    #[test]
    fn test_degenerate_logo_masks_nothing() {
        let config = RenderConfig {
            logo_size: 0.0,
            logo_padding: 0.0,
            logo_border_width: 0.0,
            ..Default::default()
        };
        let matrix = ModuleMatrix::encode("https://example.com", ECLevel::H).unwrap();
        let layout = Layout::new(matrix.width(), &config).unwrap();
        let grid = ZoneGrid::classify(&matrix, &layout).unwrap();
        assert!(grid.count(Zone::LogoArea) <= 1);

        let prims = render_qr_code("https://example.com", &config).unwrap();
        let Some(Primitive::LogoMask(mask)) = prims.last() else { panic!("Expected a logo mask") };
        assert_eq!((mask.rect.x, mask.rect.w), (100.0, 0.0));
        assert_eq!(mask.ring.circle.r, 0.0);
    }

    #[test]
    fn test_encoder_is_deterministic() {
        let a = ModuleMatrix::encode("https://example.com", ECLevel::H).unwrap();
        let b = ModuleMatrix::encode("https://example.com", ECLevel::H).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_renders_match_sequential() {
        let inputs = (0..32)
            .map(|i| {
                let config = RenderConfig {
                    size: 150.0 + i as f64 * 10.0,
                    logo_size: (i % 5) as f64 * 10.0,
                    logo_hit_test: if i % 2 == 0 { LogoHitTest::CornerPoint } else { LogoHitTest::CellOverlap },
                    ..Default::default()
                };
                (format!("https://example.com/{}", "x".repeat(i)), config)
            })
            .collect::<Vec<_>>();

        let sequential = inputs.iter().map(|(d, c)| render_qr_code(d, c).unwrap()).collect::<Vec<_>>();
        let parallel = inputs.par_iter().map(|(d, c)| render_qr_code(d, c).unwrap()).collect::<Vec<_>>();
        assert_eq!(sequential, parallel);
    }

    #[test_case("Hello, world!🌎", ECLevel::L; "unicode")]
    #[test_case("TEST", ECLevel::M; "alphanumeric")]
    #[test_case("12345", ECLevel::Q; "numeric")]
    #[test_case(&"https://docs.lukso.tech/standards/generic-standards/lsp1-universal-receiver-delegate".to_string(), ECLevel::H; "long url")]
    #[test_case(&"1234567890".repeat(100), ECLevel::H; "large version")]
    fn test_render_any_version(data: &str, ecl: ECLevel) {
        let config = RenderConfig { ec_level: ecl, ..Default::default() };
        let prims = render_qr_code(data, &config).unwrap();
        let matrix = ModuleMatrix::encode(data, ecl).unwrap();
        assert!(matrix.module_count() >= 21);
        assert!(matches!(prims[0], Primitive::Background { .. }));
        assert_eq!(prims.iter().filter(|p| matches!(p, Primitive::EyeMarker(_))).count(), 3);
    }

    #[test]
    fn test_too_long_for_level() {
        let data = "1234567890".repeat(306);
        let err = render_qr_code(&data, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, QRError::EncodingFailure(_)));
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn test_raster_output() {
        let qr = QRBuilder::new("https://example.com").build().unwrap();
        let img = qr.to_image(4).unwrap();
        assert_eq!(img.dimensions(), (800, 800));

        // Top-left eye centred near (96.5, 96.5) with outer radius ~96.5 px
        assert_eq!(*img.get_pixel(96, 96), BLACK);
        assert_eq!(*img.get_pixel(159, 96), WHITE);
        assert_eq!(*img.get_pixel(183, 96), BLACK);

        // Logo zone: cleared centre, ring at radius 104 px, stroke 8 px
        assert_eq!(*img.get_pixel(400, 400), WHITE);
        assert_eq!(*img.get_pixel(504, 400), BLACK);
        assert_eq!(*img.get_pixel(280, 400), WHITE);
    }

    #[test]
    fn test_save_svg_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let qr = QRBuilder::new("https://example.com").build().unwrap();

        let svg_path = dir.path().join("qr.svg");
        qr.save(&svg_path, 1).unwrap();
        let svg = std::fs::read_to_string(&svg_path).unwrap();
        assert!(svg.contains("<svg"));

        let png_path = dir.path().join("qr.png");
        qr.save(&png_path, 2).unwrap();
        let img = image::open(&png_path).unwrap();
        assert_eq!((img.width(), img.height()), (400, 400));
    }

    #[test]
    fn test_config_file_roundtrip() {
        let config = RenderConfig::from_toml_str(
            r##"
            size = 200
            logo_size = 44
            logo_padding = 10
            "##,
        )
        .unwrap();
        let from_file = render_qr_code("https://example.com", &config).unwrap();
        let built = QRBuilder::new("https://example.com")
            .logo_size(44.0)
            .logo_padding(10.0)
            .build()
            .unwrap()
            .into_primitives();
        assert_eq!(from_file, built);
    }
}
