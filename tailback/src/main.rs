use clap::Parser;
use tailback::app::TailbackApp;

fn main() {
    env_logger::init();
    let args = TailbackApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running tailback: {e}");
            std::process::exit(1);
        }
    }
}
