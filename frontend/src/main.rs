fn main() {
    webook_frontend::start();
}
