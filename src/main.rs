fn main() {
    omnipm::run_cli();
}
