#[cfg(test)]
mod shape_proptests {
    use std::f64::consts::PI;

    use proptest::prelude::*;

    use qrshape::{
        safety::{alignment_pattern_centers, is_protected_qr_cell},
        shape::{is_point_inside_shape, polygon_radius},
        width_from_version, Matrix, Shape, ShapedQrBuilder,
    };

    pub fn shape_strategy() -> BoxedStrategy<Shape> {
        prop_oneof![Just(Shape::Square), Just(Shape::Circle), (-2i32..12).prop_map(Shape::polygon)]
            .boxed()
    }

    pub fn matrix_strategy() -> impl Strategy<Value = Matrix> {
        (1i32..=12).prop_flat_map(|ver| {
            let w = width_from_version(ver) as usize;
            prop::collection::vec(any::<bool>(), w * w)
                .prop_map(move |grid| Matrix::from_flat(w, grid).unwrap())
        })
    }

    proptest! {
        #[test]
        fn proptest_protected_always_visible(
            m in matrix_strategy(),
            shape in shape_strategy(),
            inset in 0u32..12,
            module_sz in 1u32..10,
            qz in 0u32..6,
        ) {
            let qr = ShapedQrBuilder::new(&m)
                .shape(shape)
                .module_size(module_sz)
                .quiet_zone(qz)
                .shape_inset(inset)
                .build()
                .unwrap();
            let w = m.width();
            for (r, c, dark) in m.modules() {
                if dark && is_protected_qr_cell(r as i32, c as i32, w as i32) {
                    prop_assert!(qr.is_visible(r, c));
                }
                if !dark {
                    prop_assert!(!qr.is_visible(r, c));
                }
            }
        }

        #[test]
        fn proptest_square_is_noop(m in matrix_strategy(), inset in 0u32..12) {
            let qr = ShapedQrBuilder::new(&m).shape_inset(inset).build().unwrap();
            prop_assert_eq!(qr.visibility(), m.grid());
        }

        #[test]
        fn proptest_circle_symmetric(x in 0i32..=200, y in 0i32..=200, half in 1i32..=100) {
            let size = (half * 2) as f64;
            let (x, y) = (x as f64, y as f64);
            let inside = is_point_inside_shape(Shape::Circle, x, y, size);
            prop_assert_eq!(inside, is_point_inside_shape(Shape::Circle, size - x, size - y, size));
            prop_assert_eq!(inside, is_point_inside_shape(Shape::Circle, size - x, y, size));
            prop_assert_eq!(inside, is_point_inside_shape(Shape::Circle, x, size - y, size));
        }

        #[test]
        fn proptest_polygon_radius_periodic(n in 3i32..20, theta in -10.0f64..10.0) {
            let r = 50.0;
            let sector = 2.0 * PI / n as f64;
            let a = polygon_radius(n, r, theta);
            let b = polygon_radius(n, r, theta + sector);
            prop_assert!((a - b).abs() < 1e-6);
            let apothem = r * (PI / n as f64).cos();
            prop_assert!(a <= r + 1e-9);
            prop_assert!(a >= apothem - 1e-9);
        }

        #[test]
        fn proptest_polygon_inside_implies_circle(
            n in 3i32..12,
            x in 0.0f64..100.0,
            y in 0.0f64..100.0,
        ) {
            // A regular polygon is inscribed in its circumcircle
            if is_point_inside_shape(Shape::polygon(n), x, y, 100.0) {
                prop_assert!((x - 50.0).hypot(y - 50.0) <= 50.0 + 1e-9);
            }
        }

        #[test]
        fn proptest_classifier_idempotent(r in -5i32..200, c in -5i32..200, ver in 1i32..=40) {
            let w = width_from_version(ver);
            prop_assert_eq!(is_protected_qr_cell(r, c, w), is_protected_qr_cell(r, c, w));
            prop_assert_eq!(alignment_pattern_centers(w), alignment_pattern_centers(w));
        }
    }

    #[test]
    fn test_alignment_table_ascending() {
        for ver in 1..=40 {
            let w = width_from_version(ver);
            let centers = alignment_pattern_centers(w);
            assert!(centers.windows(2).all(|p| p[0] < p[1]), "version {ver}: {centers:?}");
            if ver >= 2 {
                assert_eq!(centers.first(), Some(&6));
                assert_eq!(centers.last(), Some(&(w - 7)));
            } else {
                assert!(centers.is_empty());
            }
        }
    }
}

#[cfg(test)]
mod shape_tests {
    use test_case::test_case;

    use qrshape::{
        safety::{alignment_pattern_centers, is_finder_pattern_cell},
        shape::is_point_inside_shape,
        ECLevel, Matrix, QRError, Shape, ShapedQrBuilder,
    };

    #[test]
    fn test_scenario_version_1_has_no_alignment() {
        assert_eq!(alignment_pattern_centers(21), Vec::<i32>::new());
    }

    #[test]
    fn test_scenario_version_2_alignment() {
        assert_eq!(alignment_pattern_centers(25), vec![6, 18]);
    }

    #[test]
    fn test_scenario_finder_cells() {
        assert!(is_finder_pattern_cell(3, 3, 21));
        assert!(!is_finder_pattern_cell(10, 10, 21));
    }

    #[test_case(100.0)]
    #[test_case(37.0)]
    #[test_case(1.0)]
    fn test_scenario_circle_boundary_inclusive(size: f64) {
        assert!(is_point_inside_shape(Shape::Circle, size / 2.0, 0.0, size));
    }

    #[test_case("https://example.com".to_string(), ECLevel::H; "test_square_1")]
    #[test_case("Hello, world!🌎".to_string(), ECLevel::L; "test_square_2")]
    #[test_case("1234567890".repeat(30), ECLevel::M; "test_square_3")]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(10), ECLevel::Q; "test_square_4")]
    fn test_scenario_square_equals_matrix(data: String, ecl: ECLevel) {
        let m = Matrix::generate(data.as_bytes(), ecl).unwrap();
        let qr = ShapedQrBuilder::new(&m).build().unwrap();
        for (r, c, dark) in m.modules() {
            assert_eq!(qr.is_visible(r, c), dark);
        }
    }

    #[test_case(Shape::Circle; "circle")]
    #[test_case(Shape::polygon(5); "pentagon")]
    #[test_case(Shape::polygon(6); "hexagon")]
    fn test_shaped_output_consistent(shape: Shape) {
        let m = Matrix::from_data("https://example.com/a/longer/path".as_bytes()).unwrap();
        let qr = ShapedQrBuilder::new(&m).shape(shape).build().unwrap();
        assert_eq!(qr.visibility().len(), m.width() * m.width());
        assert_eq!(qr.count_visible() + qr.count_hidden(), m.count_dark_modules());
        assert!(qr.count_hidden() > 0);

        let img = qr.to_image().unwrap();
        assert_eq!(img.dimensions(), (qr.dimension(), qr.dimension()));
        assert_eq!(qr.to_svg().matches("<rect").count(), qr.count_visible() + 1);
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let rows = vec![vec![true; 21]; 20];
        assert_eq!(Matrix::new(rows), Err(QRError::NonSquareMatrix));
    }

    #[test]
    fn test_non_standard_width_does_not_panic() {
        let m = Matrix::from_flat(30, vec![true; 900]).unwrap();
        let qr = ShapedQrBuilder::new(&m).shape(Shape::Circle).build().unwrap();
        assert_eq!(qr.width(), 30);
    }
}
