fn main() {
    let pepper = credentials::generate_pepper();

    println!("{}", pepper);
    eprintln!("Set it as PASSWORD__PEPPER; keep it out of version control and the database.");
}
