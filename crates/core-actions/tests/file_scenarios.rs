mod common;

use common::Session;
use core_actions::Action;
use core_events::KeyCode;
use core_state::EngineError;
use pretty_assertions::assert_eq;

#[test]
fn save_prompt_writes_raw_bytes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.txt");
    let mut s = Session::default();
    s.type_text("line one\nline two")?;
    s.key(KeyCode::F(2))?;
    s.type_text(path.to_str().expect("utf-8 temp path"))?;
    s.key(KeyCode::Enter)?;
    assert_eq!(std::fs::read(&path)?, b"line one\nline two");
    Ok(())
}

#[test]
fn open_prompt_loads_and_resets_history() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("in.txt");
    std::fs::write(&path, b"loaded\r\n")?;
    let mut s = Session::default();
    s.type_text("scratch")?;
    s.key(KeyCode::Backspace)?;
    s.key(KeyCode::F(3))?;
    s.type_text(path.to_str().expect("utf-8 temp path"))?;
    s.key(KeyCode::Enter)?;
    assert_eq!(s.engine.save(), b"loaded\r\n");
    assert_eq!(s.engine.history().undo_entries(), b"loaded\r\n");
    assert_eq!(s.engine.history().redo_depth(), 0);
    // undo walks back through the loaded bytes as if typed
    s.ctrl('z')?;
    assert_eq!(s.engine.save(), b"loaded\r");
    Ok(())
}

#[test]
fn failed_load_surfaces_error_and_keeps_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = Session::default();
    s.type_text("keep").unwrap();
    let err = s
        .apply(Action::Load(dir.path().join("missing.txt")))
        .unwrap_err();
    let engine_err = err.downcast_ref::<EngineError>().expect("engine error");
    assert!(matches!(engine_err, EngineError::Load { .. }));
    assert_eq!(s.text(), "keep");
}

#[test]
fn load_save_round_trip_through_actions() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let src = dir.path().join("a.bin");
    let dst = dir.path().join("b.bin");
    let payload: Vec<u8> = (0u8..=255).collect();
    std::fs::write(&src, &payload)?;
    let mut s = Session::default();
    s.apply(Action::Load(src))?;
    s.apply(Action::Save(dst.clone()))?;
    assert_eq!(std::fs::read(dst)?, payload);
    Ok(())
}
