//! Tests for slice-then-rotate sequencing and stage events

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
    use sheetcut::layout::{PartCatalog, SheetLayout, TruncationPolicy};
    use sheetcut::pipeline::{Pipeline, RotateTarget, Rotation, Stage, StageObserver};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        visited: Vec<(Stage, PathBuf)>,
    }

    impl StageObserver for Recorder {
        fn stage_started(&mut self, stage: Stage, total: usize) {
            self.events.push(format!("start {stage} {total}"));
        }

        fn file_visited(&mut self, stage: Stage, path: &Path) {
            self.visited.push((stage, path.to_path_buf()));
        }

        fn stage_finished(&mut self, stage: Stage) {
            self.events.push(format!("finish {stage}"));
        }
    }

    fn layout(root: &Path) -> SheetLayout {
        let layout = SheetLayout::new(
            root.join("sheet.png"),
            root.join("parts"),
            2,
            PartCatalog::new(["a", "b"]).unwrap(),
        )
        .unwrap();
        DynamicImage::ImageRgba8(RgbaImage::from_fn(20, 6, |x, y| {
            Rgba([x as u8, y as u8, 0, 255])
        }))
        .save(layout.sheet_path())
        .unwrap();
        layout
    }

    // Tests both stages run in order against the same layout
    // Verified by rotating before slicing
    #[test]
    fn test_pipeline_runs_both_stages() {
        let temp_dir = TempDir::new().unwrap();
        let layout = layout(temp_dir.path());

        let report = Pipeline::new(&layout).run().unwrap();

        assert_eq!(report.slice.written.len(), 4);
        assert_eq!(report.rotate.rotated.len(), 4);
        assert!(report.rotate.skipped.is_empty());
        let part = image::open(layout.part_path("a", 1)).unwrap();
        assert_eq!(part.dimensions(), (3, 10));
    }

    // Tests stage events are emitted slice first
    // Verified by swapping stage order
    #[test]
    fn test_pipeline_observer_events() {
        let temp_dir = TempDir::new().unwrap();
        let layout = layout(temp_dir.path());
        let mut recorder = Recorder::default();

        Pipeline::new(&layout).run_observed(&mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec!["start slice 4", "finish slice", "start rotate 4", "finish rotate"]
        );
        assert_eq!(recorder.visited.len(), 8);
        assert_eq!(
            recorder.visited.first(),
            Some(&(Stage::Slice, layout.part_path("a", 1)))
        );
        assert_eq!(
            recorder.visited.last(),
            Some(&(Stage::Rotate, layout.part_path("b", 2)))
        );
    }

    // Tests a slicing failure prevents rotation
    // Verified by ignoring the slice result
    #[test]
    fn test_pipeline_stops_after_slice_failure() {
        let temp_dir = TempDir::new().unwrap();
        let layout = SheetLayout::new(
            temp_dir.path().join("sheet.png"),
            temp_dir.path().join("parts"),
            3,
            PartCatalog::new(["a", "b"]).unwrap(),
        )
        .unwrap()
        .with_truncation(TruncationPolicy::Strict);
        DynamicImage::ImageRgba8(RgbaImage::new(10, 4))
            .save(layout.sheet_path())
            .unwrap();
        let mut recorder = Recorder::default();

        let result = Pipeline::new(&layout).run_observed(&mut recorder);

        assert!(result.is_err());
        assert!(!recorder.events.iter().any(|e| e.contains("rotate")));
    }

    // Tests rotation settings are forwarded to the rotator
    // Verified by ignoring the configured target
    #[test]
    fn test_pipeline_rotation_settings() {
        let temp_dir = TempDir::new().unwrap();
        let layout = layout(temp_dir.path());
        let copy_root = temp_dir.path().join("turned");

        let report = Pipeline::new(&layout)
            .with_rotation(Rotation::Half)
            .with_target(RotateTarget::CopyTo(copy_root.clone()))
            .run()
            .unwrap();

        assert!(report.rotate.rotated.iter().all(|p| p.starts_with(&copy_root)));
        let copy = image::open(copy_root.join("b").join("2.png")).unwrap();
        assert_eq!(copy.dimensions(), (10, 3));
        let source = image::open(layout.part_path("b", 2)).unwrap();
        assert_eq!(source.dimensions(), (10, 3));
    }

    // Tests stage labels
    // Verified by changing label text
    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::Slice.label(), "slice");
        assert_eq!(Stage::Rotate.to_string(), "rotate");
    }
}
