fn main() {
    prompt_architect::app::cli::run();
}
