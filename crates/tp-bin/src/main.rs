//! tailpad entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::{Action, Prompt, PromptStep, dispatch, translate_key};
use core_config::load_from;
use core_events::{Event, KeyEvent};
use core_state::Engine;
use core_terminal::{CrosstermBackend, Frame, TerminalBackend};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod input;

const HEADER: [&str; 7] = [
    "-----Text Editor-----",
    "Ctrl+C Copy | Ctrl+X Cut | Ctrl+V Paste",
    "Ctrl+B Mark start | Ctrl+E Mark end",
    "Ctrl+Z Undo | Ctrl+Y Redo | Backspace Delete",
    "F2 Save | F3 Open | F4 Search/Replace",
    "ESC Exit",
    "--------------------------------------",
];

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tailpad", version, about = "Tail-append text buffer")]
struct Args {
    /// Optional file to load at startup.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `tailpad.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("tailpad.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "tailpad.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Engine plus the status line produced while building it.
struct Bootstrap {
    engine: Engine,
    status: Option<String>,
}

fn bootstrap(args: &Args) -> Result<Bootstrap> {
    let config = load_from(args.config.clone())?;
    let limits = config.engine_limits();
    let mut engine = Engine::new(limits);
    let status = match args.path.as_ref() {
        Some(path) => match core_actions::io_ops::load_file(&mut engine, path) {
            Ok(size) => Some(format!("opened {} ({size} bytes)", path.display())),
            Err(e) => Some(e.to_string()),
        },
        None => None,
    };
    info!(
        target: "runtime.startup",
        config_override = args.config.is_some(),
        config_source = ?config.source,
        history_capacity = limits.history_capacity,
        clipboard_capacity = limits.clipboard_capacity,
        len = engine.len(),
        "bootstrap_complete"
    );
    Ok(Bootstrap { engine, status })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Quit,
}

struct Runtime {
    engine: Engine,
    prompt: Option<Prompt>,
    status: Option<String>,
    /// Set when the next frame differs from the last one drawn.
    redraw: bool,
}

impl Runtime {
    fn new(bootstrap: Bootstrap) -> Self {
        Self {
            engine: bootstrap.engine,
            prompt: None,
            status: bootstrap.status,
            redraw: true,
        }
    }

    /// Clears and returns the pending redraw flag.
    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    fn handle_event(&mut self, event: &Event) -> LoopControl {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => {
                self.redraw = true;
                LoopControl::Continue
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LoopControl {
        if let Some(prompt) = self.prompt.as_mut() {
            // prompt input is echoed on every key
            self.redraw = true;
            return match prompt.handle_key(key) {
                PromptStep::Pending => LoopControl::Continue,
                PromptStep::Cancelled => {
                    self.prompt = None;
                    self.status = Some("cancelled".to_string());
                    LoopControl::Continue
                }
                PromptStep::Done(action) => {
                    self.prompt = None;
                    self.process_action(action)
                }
            };
        }
        match translate_key(key) {
            Some(action) => self.process_action(action),
            None => LoopControl::Continue,
        }
    }

    fn process_action(&mut self, action: Action) -> LoopControl {
        let name = action.name();
        match dispatch(action, &mut self.engine) {
            Ok(result) => {
                if result.buffer_replaced {
                    info!(target: "runtime", op = name, len = self.engine.len(), "buffer_replaced");
                }
                if let Some(kind) = result.prompt {
                    self.prompt = Some(Prompt::new(kind));
                }
                self.redraw |= result.dirty
                    || result.buffer_replaced
                    || result.prompt.is_some()
                    || result.status != self.status;
                self.status = result.status;
                if result.quit {
                    LoopControl::Quit
                } else {
                    LoopControl::Continue
                }
            }
            Err(e) => {
                warn!(target: "runtime", op = name, error = %e, "action_failed");
                self.status = Some(e.to_string());
                self.redraw = true;
                LoopControl::Continue
            }
        }
    }

    fn render<B: TerminalBackend>(&self, backend: &mut B) -> Result<()> {
        let body = self.engine.render();
        let frame = Frame {
            header: &HEADER,
            body: &body,
            status: self.status.as_deref(),
            prompt: self.prompt.as_ref().map(|p| (p.label(), p.input())),
        };
        backend.draw(&frame)
    }
}

fn main() -> Result<()> {
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let mut runtime = Runtime::new(bootstrap(&args)?);

    let mut guard = startup.backend.enter_guard()?;
    guard.backend().set_title("tailpad")?;
    runtime.take_redraw();
    runtime.render(guard.backend())?;

    loop {
        let raw = crossterm::event::read()?;
        let Some(event) = input::map_event(&raw) else {
            continue;
        };
        if runtime.handle_event(&event) == LoopControl::Quit {
            break;
        }
        if runtime.take_redraw() {
            runtime.render(guard.backend())?;
        }
    }

    drop(guard);
    info!(target: "runtime", len = runtime.engine.len(), "shutdown");
    Ok(())
}
