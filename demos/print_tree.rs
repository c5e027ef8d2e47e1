use avl_words::AvlTreeMap;

fn main() {
    let mut map = AvlTreeMap::new();
    for key in 1..=6 {
        map.insert(key, 1);
    }
    map.insert(3, 1);

    println!("Indented:");
    print!("{map}");
    println!("Nested:");
    println!("{}", map.to_nested_string());
}
