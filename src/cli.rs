// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pwd_analyzer",
    about = "Entropy-based password strength analyzer",
    version
)]
pub struct Args {
    /// Address to bind the web server
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// Web server port
    #[arg(long, short, env = "WEB_PORT")]
    pub port: Option<u16>,
}
