mod app;
mod renderer;
mod term;
mod theme;

use anyhow::{Context, Result};
use folio_core::content::PageContent;
use folio_protocol::ThemeMode;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let content = PageContent::builtin();
    content.validate().context("built-in page content is invalid")?;

    match args.first().map(String::as_str) {
        None => app::App::new(content).run(),
        Some("export") => export(&content, &args[1..]),
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn export(content: &PageContent, args: &[String]) -> Result<()> {
    let mut mode = ThemeMode::Dark;
    let mut path: Option<&str> = None;
    for arg in args {
        match arg.as_str() {
            "--light" => mode = ThemeMode::Light,
            "--dark" => mode = ThemeMode::Dark,
            other if !other.starts_with('-') && path.is_none() => path = Some(other),
            other => {
                eprintln!("unknown export option: {other}");
                std::process::exit(1);
            }
        }
    }
    let path = path.unwrap_or("folio.html");
    let html = folio_core::html::export_html(content, mode);
    std::fs::write(path, html).with_context(|| format!("writing {path}"))?;
    eprintln!("wrote {path}");
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: folio [export [--light|--dark] [PATH]]");
    eprintln!();
    eprintln!("  folio            open the page in the terminal");
    eprintln!("  folio export     write a standalone HTML page (default folio.html)");
    eprintln!();
    eprintln!("Keys: j/k or arrows scroll, space/PgDn page down, g/G jump to the ends,");
    eprintln!("      1-4 or a/e/p/c open a section, h home, t toggles the theme, q quits");
}
