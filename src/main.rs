use clap::Parser;
use psychro_toolbox::app::{self, Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 CLI 명령을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
