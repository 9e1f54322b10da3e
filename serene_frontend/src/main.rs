fn main() -> Result<(), eframe::Error> {
    serene_frontend::run_frontend()
}
