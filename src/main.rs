fn main() {
    if let Err(err) = zint_svg::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
