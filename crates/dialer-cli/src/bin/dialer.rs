use dialer_cli::repl::{confirm_prompt, emit, run_repl, stdin_is_interactive};
use dialer_cli::Session;
use dialer_core::phone::Phone;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_file: Option<String> = None;
    if matches!(args.first().map(String::as_str), Some("-c" | "--config")) {
        if args.len() < 2 {
            eprintln!("flag needs an argument: --config");
            std::process::exit(2);
        }
        config_file = Some(args[1].clone());
        args.drain(..2);
    }

    let cfg = match dialer_core::config::load_config(config_file.as_deref()) {
        Ok((cfg, path)) => {
            if let Err(e) = dialer_core::logging::init_logging(&cfg.logging) {
                eprintln!("{e}");
            }
            if let Some(path) = path {
                tracing::debug!(path = %path.display(), "config loaded");
            }
            cfg
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let interactive = stdin_is_interactive();
    let mut session = Session::new(Phone::from_config(&cfg), confirm_prompt(interactive));

    // One-shot mode: run the command given on the command line.
    if !args.is_empty() {
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let out = session.run(&refs);
        emit(&out, &mut std::io::stdout(), &mut std::io::stderr());
        std::process::exit(out.exit_code);
    }

    let code = run_repl(
        &mut session,
        std::io::stdin().lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        interactive,
    );
    std::process::exit(code);
}
