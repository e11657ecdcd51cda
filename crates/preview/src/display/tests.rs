use std::cell::RefCell;

use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
	Show(PathBuf, Rect),
	Clear,
}

#[derive(Default)]
struct FakeDisplay {
	calls: RefCell<Vec<Call>>,
	fail_with: Option<DisplayError>,
}

impl ImageDisplay for FakeDisplay {
	fn available(&self) -> bool {
		true
	}

	fn show(&self, image: &Path, region: Rect) -> Result<(), DisplayError> {
		self.calls.borrow_mut().push(Call::Show(image.to_path_buf(), region));
		match &self.fail_with {
			Some(err) => Err(err.clone()),
			None => Ok(()),
		}
	}

	fn clear(&self) {
		self.calls.borrow_mut().push(Call::Clear);
	}
}

fn done(image: &str) -> JobResult {
	JobResult {
		image: Some(PathBuf::from(image)),
		message: "Preview updated.".to_string(),
	}
}

const REGION: Rect = Rect {
	x: 2,
	y: 8,
	width: 76,
	height: 10,
};

#[test]
fn successful_result_is_shown_once() {
	let display = FakeDisplay::default();
	let mut state = PreviewState::default();
	state.update_region(REGION);

	assert_eq!(state.apply_result(done("/tmp/a.png"), &display), "Preview updated.");
	assert_eq!(state.process(&display), None);
	assert_eq!(state.process(&display), None);
	assert_eq!(*display.calls.borrow(), [Call::Show(PathBuf::from("/tmp/a.png"), REGION)]);
	assert!(state.is_visible());
}

#[test]
fn region_change_redisplays() {
	let display = FakeDisplay::default();
	let mut state = PreviewState::default();
	state.update_region(REGION);
	state.apply_result(done("/tmp/a.png"), &display);
	state.process(&display);

	state.update_region(REGION);
	assert_eq!(state.process(&display), None);
	assert_eq!(display.calls.borrow().len(), 1);

	let moved = Rect::new(2, 6, 76, 12);
	state.update_region(moved);
	state.process(&display);
	assert_eq!(display.calls.borrow().last(), Some(&Call::Show(PathBuf::from("/tmp/a.png"), moved)));
}

#[test]
fn empty_region_hides_preview() {
	let display = FakeDisplay::default();
	let mut state = PreviewState::default();
	state.update_region(REGION);
	state.apply_result(done("/tmp/a.png"), &display);
	state.process(&display);

	state.update_region(Rect::new(2, 8, 76, 0));
	assert_eq!(state.process(&display).as_deref(), Some("Terminal too small to show the preview."));
	assert!(!state.is_visible());
	assert_eq!(display.calls.borrow().last(), Some(&Call::Clear));
	assert_eq!(state.process(&display), None);
}

#[test]
fn failed_job_hides_visible_preview() {
	let display = FakeDisplay::default();
	let mut state = PreviewState::default();
	state.update_region(REGION);
	state.apply_result(done("/tmp/a.png"), &display);
	state.process(&display);

	let failed = JobResult {
		image: None,
		message: "LaTeX compilation failed".to_string(),
	};
	assert_eq!(state.apply_result(failed, &display), "LaTeX compilation failed");
	assert!(!state.is_visible());
	assert_eq!(display.calls.borrow().last(), Some(&Call::Clear));
}

#[test]
fn display_failure_is_reported() {
	let display = FakeDisplay {
		fail_with: Some(DisplayError::Failed(2)),
		..FakeDisplay::default()
	};
	let mut state = PreviewState::default();
	state.update_region(REGION);
	state.apply_result(done("/tmp/a.png"), &display);

	assert_eq!(state.process(&display).as_deref(), Some("Kitty preview failed (exit 2)."));
	assert!(!state.is_visible());
}

#[test]
fn nothing_to_do_without_image() {
	let display = FakeDisplay::default();
	let mut state = PreviewState::default();
	assert_eq!(state.process(&display), None);
	state.hide(&display);
	assert!(display.calls.borrow().is_empty());
}
