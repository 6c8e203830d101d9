#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "MEOWNORRIS_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "MEOWNORRIS_HOST", default_value = "0.0.0.0")]
    pub host: String,
}
