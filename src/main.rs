fn main() {
    weft::app::cli::run();
}
