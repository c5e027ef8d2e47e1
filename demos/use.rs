use avl_words::{AvlTreeMap, BstMap};

fn main() {
    let mut map = AvlTreeMap::new();
    map.insert("zero", 1);
    map.insert("one", 1);
    map.insert("two", 1);
    map.insert("two", 1);
    map.insert("three", 1);
    assert_eq!(map.find(&"two"), Some(&2));
    assert!(map.find(&"four").is_none());
    println!("{} keys, size {}", map.len(), map.size());

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut bst = BstMap::new();
    for x in 0..5 {
        bst.insert(x, 1u32);
    }
    assert_eq!(bst.remove(&1), Some(1));
    assert!(!bst.contains_key(&1));
    println!("{}", bst.to_nested_string());
}
