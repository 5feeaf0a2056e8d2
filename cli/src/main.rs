use std::io::Write;
use std::path::PathBuf;

use bassault_cli::commands::respond;
use bassault_cli::script::replay_file;
use bassault_cli::{CliContext, logging, readline};
use bassault_core::{PluginConfig, PluginConfigExt};
use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Replay Barbarian Assault host events through the plugin")]
struct Args {
    /// Command script to replay; reads commands from stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> Result<(), String> {
    let _guard = logging::init();
    let args = Args::parse();

    let mut ctx = CliContext::new(PluginConfig::load());

    if let Some(path) = args.script {
        let output = replay_file(&path, &mut ctx).map_err(|e| e.to_string())?;
        for line in output {
            println!("{line}");
        }
        return Ok(());
    }

    ctx.plugin.start_up();
    while let Some(line) = readline().map_err(|e| e.to_string())? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(response) => {
                for output in &response.lines {
                    println!("{output}");
                }
                if response.quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.plugin.shut_down();
    Ok(())
}
