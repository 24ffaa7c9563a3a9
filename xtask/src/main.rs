use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

type DynError = Box<dyn std::error::Error>;

const WIDGET_PACKAGE: &str = "blog-articles-list";
const WIDGET_ARTIFACT: &str = "blog_articles_list.wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{}", e);
        std::process::exit(-1);
    }
}

fn try_main() -> Result<(), DynError> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("build-widget") => build_widget(env::args().any(|arg| arg == "--dev"))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    println!("Usage: cargo xtask <task>");
    println!();
    println!("Available tasks:");
    println!("  build-widget [--dev]   Compile the articles list to WebAssembly for the website");
}

fn build_widget(dev: bool) -> Result<(), DynError> {
    let workspace_root = project_root();
    let out_dir = workspace_root.join("website/static/pkg");
    let profile = if dev { "debug" } else { "release" };

    println!("Building {} for {}...", WIDGET_PACKAGE, WASM_TARGET);

    let mut cargo = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()));
    cargo
        .current_dir(&workspace_root)
        .args(["build", "--package", WIDGET_PACKAGE, "--target", WASM_TARGET]);
    if !dev {
        cargo.arg("--release");
    }
    run(&mut cargo)?;

    fs::create_dir_all(&out_dir)?;

    let artifact = workspace_root
        .join("target")
        .join(WASM_TARGET)
        .join(profile)
        .join(WIDGET_ARTIFACT);

    // Generates the JS glue loaded by the articles page, `/pkg/blog_articles_list.js`.
    run(Command::new("wasm-bindgen")
        .arg("--target")
        .arg("web")
        .arg("--no-typescript")
        .arg("--out-dir")
        .arg(&out_dir)
        .arg(&artifact))
    .map_err(|e| format!("{} (is wasm-bindgen-cli installed?)", e))?;

    println!(
        "Successfully built the articles list into {}",
        out_dir.display()
    );

    Ok(())
}

fn run(command: &mut Command) -> Result<(), DynError> {
    let status = command
        .status()
        .map_err(|e| format!("Failed to run {:?}: {}", command.get_program(), e))?;

    if !status.success() {
        return Err(format!("{:?} exited with {}", command.get_program(), status).into());
    }

    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}
