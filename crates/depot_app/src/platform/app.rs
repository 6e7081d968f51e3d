use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use depot_core::{update, AppState, MapView, Msg};
use depot_engine::RecognitionSettings;
use depot_logging::{depot_error, depot_info};

use super::clock;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence::PersistenceStore;
use super::render;

/// Upper bound on one engine reply; a stuck call is reported and the loop
/// returns to the prompt.
const ENGINE_WAIT: Duration = Duration::from_secs(120);

pub fn run_app() {
    logging::initialize(LogDestination::Both);

    let state_dir = env_path("DEPOT_STATE_DIR", "./depot_state");
    let camera_dir = env_path("DEPOT_CAMERA_DIR", "./camera_frames");
    let settings = settings_from_env();

    let store = PersistenceStore::new(state_dir.clone());
    let pending = store.load_pending();
    let history = store.load_history();

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = match EffectRunner::new(msg_tx, store, settings, camera_dir, state_dir) {
        Ok(runner) => runner,
        Err(err) => {
            depot_error!("Failed to start the recognition engine: {}", err);
            return;
        }
    };

    let mut controller = SessionController {
        state: AppState::new(),
        msg_rx,
        runner,
    };
    controller.dispatch(Msg::StateRestored { pending, history });

    depot_info!("Depot pickup tracker started");
    let stdin = io::stdin();
    loop {
        if controller.state.consume_dirty() {
            render::render(&controller.state.view());
        }
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        match parse_command(line.trim()) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Dispatch(msgs) => {
                for msg in msgs {
                    controller.dispatch(msg);
                }
            }
            Command::Unknown(word) => println!("未知命令 {word:?}，输入 help 查看用法"),
            Command::Empty => {}
        }
    }

    // Teardown: an active pickup still holds the capture device.
    controller.dispatch(Msg::PickupCancelled);
}

struct SessionController {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
}

impl SessionController {
    /// Applies a message, then blocks on engine replies for as long as they
    /// are the only way forward. No cancellation: an outstanding call must
    /// finish or fail before the prompt returns.
    fn dispatch(&mut self, msg: Msg) {
        self.apply(msg);
        while self.state.awaiting_engine() {
            match self.msg_rx.recv_timeout(ENGINE_WAIT) {
                Ok(msg) => self.apply(msg),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    depot_error!("Engine did not respond within {:?}", ENGINE_WAIT);
                    break;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        // Drain replies that arrived after the wait ended.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.apply(msg);
        }
    }

    fn apply(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(&self.state, effects);
    }
}

enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
    Empty,
}

fn parse_command(line: &str) -> Command {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msgs = match word {
        "" => return Command::Empty,
        "quit" | "exit" => return Command::Quit,
        "help" => return Command::Help,
        // `\n` in the argument stands for a line break.
        "text" => vec![Msg::TextSubmitted(rest.replace("\\n", "\n"))],
        "image" => match read_images(rest) {
            Some(images) => vec![Msg::ImagesSubmitted(images)],
            None => return Command::Empty,
        },
        "map" => match parse_map(rest) {
            Some(map) => vec![Msg::MapSelected(map)],
            None => return Command::Unknown(rest.to_string()),
        },
        "code" => match rest.split_once(char::is_whitespace) {
            Some((index, code)) => match index.parse() {
                Ok(index) => vec![Msg::CardCodeEdited {
                    index,
                    code: code.trim().to_string(),
                }],
                Err(_) => return Command::Unknown(rest.to_string()),
            },
            None => return Command::Unknown(rest.to_string()),
        },
        "area" => match rest.split_once(char::is_whitespace) {
            Some((index, area)) => match index.parse() {
                Ok(index) => vec![Msg::CardAreaEdited {
                    index,
                    area: parse_area(area.trim()),
                }],
                Err(_) => return Command::Unknown(rest.to_string()),
            },
            None => return Command::Unknown(rest.to_string()),
        },
        "drop" => match rest.parse() {
            Ok(index) => vec![Msg::CardRemoved { index }],
            Err(_) => return Command::Unknown(rest.to_string()),
        },
        "add" => vec![Msg::CardAdded],
        "ok" => vec![Msg::RecognitionConfirmed],
        "cancel" => vec![Msg::RecognitionCancelled],
        "pick" => vec![Msg::PickupRequested {
            id: rest.to_string(),
        }],
        "shot" => vec![Msg::CaptureRequested],
        "retake" => vec![Msg::RetakeRequested],
        "confirm" => vec![Msg::PickupConfirmed {
            pickup_time: clock::pickup_time_now(),
        }],
        "abort" => vec![Msg::PickupCancelled],
        "retrycam" => vec![Msg::CameraRetryRequested],
        "swipe" => match parse_swipe(rest) {
            Some(msgs) => msgs,
            None => return Command::Unknown(rest.to_string()),
        },
        "delete" => {
            // History keys carry the composite `id|pickup_time` separator.
            if rest.contains('|') {
                vec![Msg::HistoryDeleteActivated {
                    key: rest.to_string(),
                }]
            } else {
                vec![Msg::PendingDeleteActivated {
                    id: rest.to_string(),
                }]
            }
        }
        other => return Command::Unknown(other.to_string()),
    };
    Command::Dispatch(msgs)
}

/// `swipe <key> <dx>` replays the press/move/release sequence a touch drag
/// would produce.
fn parse_swipe(rest: &str) -> Option<Vec<Msg>> {
    let (key, dx) = rest.rsplit_once(char::is_whitespace)?;
    let key = key.trim().to_string();
    let dx: f32 = dx.parse().ok()?;
    Some(vec![
        Msg::ItemPressed {
            key: key.clone(),
            x: 0.0,
        },
        Msg::ItemMoved {
            key: key.clone(),
            x: dx,
        },
        Msg::ItemReleased { key },
    ])
}

fn read_images(rest: &str) -> Option<Vec<Vec<u8>>> {
    let mut images = Vec::new();
    for path in rest.split_whitespace() {
        match std::fs::read(path) {
            Ok(bytes) => images.push(bytes),
            Err(err) => {
                println!("无法读取图片 {path}: {err}");
                return None;
            }
        }
    }
    if images.is_empty() {
        println!("image 需要至少一个文件路径");
        return None;
    }
    Some(images)
}

/// Shortcut names resolve to the canonical areas; anything else is kept as
/// a free-form area string.
fn parse_area(name: &str) -> String {
    match name {
        "cainiao" => depot_core::AREA_CAINIAO.to_string(),
        "yunda" | "yunda-jd" => depot_core::AREA_YUNDA_JD.to_string(),
        "sf" | "shunfeng" => depot_core::AREA_SHUNFENG.to_string(),
        other => other.to_string(),
    }
}

fn parse_map(name: &str) -> Option<MapView> {
    match name {
        "overview" | "total" => Some(MapView::Overview),
        "cainiao" => Some(MapView::Cainiao),
        "yunda" | "yunda-jd" => Some(MapView::YundaJd),
        "sf" | "shunfeng" => Some(MapView::Shunfeng),
        _ => None,
    }
}

fn settings_from_env() -> RecognitionSettings {
    let mut settings = RecognitionSettings::default();
    if let Ok(key) = std::env::var("DEPOT_API_KEY") {
        settings.api_key = key;
    }
    if let Ok(base) = std::env::var("DEPOT_API_BASE") {
        settings.base_url = base;
    }
    settings
}

fn env_path(variable: &str, default: &str) -> PathBuf {
    std::env::var(variable)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn print_help() {
    println!("text <内容>        识别文本（\\n 表示换行）");
    println!("image <路径>...    识别图片（逐张串行）");
    println!("map <overview|cainiao|yunda|sf>");
    println!("code <i> <取件码>  编辑识别卡片");
    println!(
        "area <i> <分区>    编辑识别卡片（可选: {}）",
        depot_core::EXPRESS_AREAS.join(" / ")
    );
    println!("drop <i> / add     删除或新增卡片");
    println!("ok / cancel        确认或取消识别结果");
    println!("pick <取件码>      开始拍照取件");
    println!("shot / retake / confirm / abort / retrycam");
    println!("swipe <键> <位移>  列表行左滑（负值）");
    println!("delete <键>        删除已左滑展开的行");
    println!("quit");
}
