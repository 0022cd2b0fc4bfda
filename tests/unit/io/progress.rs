//! Tests for per-stage progress tracking

#[cfg(test)]
mod tests {
    use sheetcut::io::progress::ProgressManager;
    use sheetcut::pipeline::{Stage, StageObserver};
    use std::path::Path;

    // Tests a stage bar counts visited files
    // Verified by not incrementing on visit
    #[test]
    fn test_stage_counts_visits() {
        let mut pm = ProgressManager::hidden();
        pm.stage_started(Stage::Slice, 4);

        pm.file_visited(Stage::Slice, Path::new("end/1.png"));
        pm.file_visited(Stage::Slice, Path::new("handle/1.png"));

        assert_eq!(pm.position(), Some(2));
        assert_eq!(pm.length(), Some(4));
    }

    // Tests finishing a stage clears the bar
    // Verified by keeping the bar after finish
    #[test]
    fn test_stage_finished_clears_bar() {
        let mut pm = ProgressManager::hidden();
        pm.stage_started(Stage::Rotate, 1);
        pm.file_visited(Stage::Rotate, Path::new("tip/5.png"));
        pm.stage_finished(Stage::Rotate);

        assert_eq!(pm.position(), None);
    }

    // Tests starting a new stage resets the count
    // Verified by reusing the previous bar
    #[test]
    fn test_new_stage_resets_position() {
        let mut pm = ProgressManager::hidden();
        pm.stage_started(Stage::Slice, 2);
        pm.file_visited(Stage::Slice, Path::new("a/1.png"));
        pm.stage_started(Stage::Rotate, 3);

        assert_eq!(pm.position(), Some(0));
        assert_eq!(pm.length(), Some(3));
    }

    // Tests visits outside a stage are ignored
    // Verified by creating a bar lazily on visit
    #[test]
    fn test_visit_without_stage() {
        let mut pm = ProgressManager::default();
        pm.file_visited(Stage::Slice, Path::new("a/1.png"));
        pm.stage_finished(Stage::Slice);

        assert_eq!(pm.position(), None);
    }
}
