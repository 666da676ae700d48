use clap::Parser;
use std::process::ExitCode;
use thermal_comfort_toolbox::{
    app::{self, Context},
    cli::Cli,
    config,
    i18n::{self, keys, Translator},
};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = Context::new(
        cfg,
        cli.config.clone(),
        &cli.lang,
        cli.locales.as_deref(),
        cli.format,
    );
    match app::run(&mut ctx, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", ctx.tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
