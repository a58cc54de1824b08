fn main() {
    lesson::term::main();
}
