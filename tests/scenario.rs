use seq_list::List;
use std::iter::FromIterator;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn work_list_scenario() {
    let initial = strings(&[
        "Pi",
        "Joe",
        "Fridge",
        "Mind Joe Business",
        "1",
        "2",
        "3",
        "4",
        "23",
        "5",
        "6",
        "7",
        "8",
        "9",
    ]);
    let mut list = List::from_iter(initial.clone());
    assert_eq!(list.len(), 14);

    let mut array = vec![String::new(); 14];
    list.copy_to(&mut array, 0).unwrap();
    assert_eq!(array, initial);

    assert_eq!(list.remove_item(&"Joe".to_string()), Ok(true));
    assert_eq!(list.len(), 13);
    assert_eq!(list.get(1).map(String::as_str), Ok("Fridge"));

    assert_eq!(list.remove_item(&"Fridge".to_string()), Ok(true));
    assert_eq!(list.len(), 12);

    assert_eq!(list.remove(5).as_deref(), Ok("4"));
    assert_eq!(list.remove(7).as_deref(), Ok("6"));
    assert_eq!(list.len(), 10);

    list.insert(8, "69".to_string()).unwrap();
    assert_eq!(list.get(8).map(String::as_str), Ok("69"));
    assert!(list.contains(&"69".to_string()));
    assert_eq!(list[3], "2");

    assert_eq!(
        list.to_vec(),
        strings(&["Pi", "Mind Joe Business", "1", "2", "3", "23", "5", "7", "69", "8", "9"])
    );

    list.clear().unwrap();
    assert_eq!(list.len(), 0);
    assert_eq!(list.iter().next(), None);
}

#[test]
fn removing_the_last_element() {
    let mut list = List::from_iter(strings(&["a", "b", "c"]));
    assert_eq!(list.remove_item(&"c".to_string()), Ok(true));
    assert_eq!(list.len(), 2);
    assert_eq!(list.back().map(String::as_str), Some("b"));

    assert_eq!(list.remove(1).as_deref(), Ok("b"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.back().map(String::as_str), Some("a"));
}
