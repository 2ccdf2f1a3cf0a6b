#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, sync::Arc};

use iced::{Settings, Size};
use tracing::{error, info};

use zkadmin_ui::{component::text, font, theme};

use zkadmin_gui::{
    config::Config,
    connector::JsonRpcConnector,
    dir::AdminDirectory,
    gui::GUI,
    logger::{parse_log_level, setup_logger},
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(AdminDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: zkadmin [OPTIONS]

Options:
    --datadir <PATH>    Path of zkadmin datadir
    -v, --version       Display zkadmin version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(AdminDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => AdminDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config_path = datadir.config_path();
    let (config, config_found) = Config::from_file_or_default(&config_path)?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, datadir.clone())?;
    setup_panic_hook();
    if !config_found {
        info!(
            "No configuration file at {}, using defaults",
            config_path.display()
        );
    }

    // The one connector of the application, shared with the panel for its whole lifetime.
    let connector = Arc::new(JsonRpcConnector::new(
        config.wallet.endpoint.clone(),
        config.wallet.request_timeout(),
    )?);

    let settings = Settings {
        id: Some("ZkAdmin".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 900.0,
            height: 800.0,
        },
        min_size: Some(Size {
            width: 600.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new(connector))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args("zkadmin")).unwrap(), Vec::new());
        assert!(parse_args(args("zkadmin --meth")).is_err());
        assert!(parse_args(args("zkadmin --datadir")).is_err());
        assert_eq!(
            parse_args(args("zkadmin --datadir hello")).unwrap(),
            vec![Arg::DatadirPath(AdminDirectory::new(PathBuf::from("hello")))]
        );
    }
}
