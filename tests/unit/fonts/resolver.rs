use std::cell::RefCell;
use std::collections::HashSet;

use super::*;

#[derive(Default)]
struct FakeProbe {
    present: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    probed: RefCell<Vec<PathBuf>>,
}

impl FakeProbe {
    fn with(present: &[&str]) -> Self {
        Self {
            present: present.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }
}

impl FontProbe for FakeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.present.contains(path)
    }

    fn read(&self, path: &Path) -> DotsResult<Vec<u8>> {
        if self.unreadable.contains(path) {
            return Err(DotsError::Other(anyhow::anyhow!("permission denied")));
        }
        Ok(path.to_string_lossy().into_owned().into_bytes())
    }
}

#[derive(Default)]
struct FakeStore {
    fail: bool,
    registered: Vec<(Vec<u8>, String)>,
}

impl FontStore for FakeStore {
    fn register_font(&mut self, bytes: Vec<u8>, logical_name: &str) -> DotsResult<()> {
        if self.fail {
            return Err(DotsError::font("not a font"));
        }
        self.registered.push((bytes, logical_name.to_string()));
        Ok(())
    }
}

fn source(candidates: &[&str]) -> FontSource {
    FontSource {
        candidates: candidates.iter().map(PathBuf::from).collect(),
        logical_name: "Custom".to_string(),
        fallback_family: "sans-serif".to_string(),
    }
}

#[test]
fn first_existing_candidate_short_circuits() {
    let probe = FakeProbe::with(&["a.ttf", "b.ttf"]);
    let mut store = FakeStore::default();

    let face = resolve_font(&source(&["a.ttf", "b.ttf", "c.ttf"]), &probe, &mut store);

    assert_eq!(face.family, "Custom");
    assert!(!face.fallback);
    assert_eq!(*probe.probed.borrow(), vec![PathBuf::from("a.ttf")]);
    assert_eq!(store.registered.len(), 1);
    assert_eq!(store.registered[0].0, b"a.ttf".to_vec());
    assert_eq!(store.registered[0].1, "Custom");
}

#[test]
fn later_candidate_used_when_earlier_missing() {
    let probe = FakeProbe::with(&["c.ttf"]);
    let mut store = FakeStore::default();

    let face = resolve_font(&source(&["a.ttf", "b.ttf", "c.ttf"]), &probe, &mut store);

    assert!(!face.fallback);
    assert_eq!(probe.probed.borrow().len(), 3);
    assert_eq!(store.registered[0].0, b"c.ttf".to_vec());
}

#[test]
fn missing_candidates_fall_back() {
    let probe = FakeProbe::default();
    let mut store = FakeStore::default();

    let face = resolve_font(&source(&["a.ttf", "b.ttf"]), &probe, &mut store);

    assert_eq!(face.family, "sans-serif");
    assert!(face.fallback);
    assert!(store.registered.is_empty());
}

#[test]
fn registration_failure_falls_back_without_trying_later_candidates() {
    let probe = FakeProbe::with(&["a.ttf", "b.ttf"]);
    let mut store = FakeStore {
        fail: true,
        ..FakeStore::default()
    };

    let face = resolve_font(&source(&["a.ttf", "b.ttf"]), &probe, &mut store);

    assert!(face.fallback);
    assert_eq!(probe.probed.borrow().len(), 1);
}

#[test]
fn unreadable_file_falls_back() {
    let mut probe = FakeProbe::with(&["a.ttf"]);
    probe.unreadable.insert(PathBuf::from("a.ttf"));
    let mut store = FakeStore::default();

    let face = resolve_font(&source(&["a.ttf"]), &probe, &mut store);

    assert!(face.fallback);
    assert!(store.registered.is_empty());
}

#[test]
fn fs_probe_reports_missing_files() {
    let probe = FsProbe;
    let missing = Path::new("definitely/not/here/font.ttf");
    assert!(!probe.exists(missing));
    assert!(probe.read(missing).is_err());
}

#[test]
fn sized_face_keeps_family() {
    let face = FontFace {
        family: "Custom".to_string(),
        fallback: false,
    };
    assert_eq!(
        face.sized(50.0),
        ResolvedFont {
            family: "Custom".to_string(),
            size_px: 50.0
        }
    );
}
