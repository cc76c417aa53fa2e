fn main() {
    // Compile lalrpop grammar files
    lalrpop::process_root().unwrap();

    println!("cargo:rerun-if-changed=src/expression/formula.lalrpop");
}
