use person_store::{Person, PersonStore};

fn main() -> Result<(), person_store::Error> {
    let path = std::env::temp_dir().join("person_store_demo_basic.json");
    let _ = std::fs::remove_file(&path);
    let store = PersonStore::builder(&path).pretty(true).build()?;

    // create / get
    store.create(Person::new(1).with_field("name", "Ada"))?;
    store.create(Person::new(2).with_field("name", "Grace"))?;
    println!("person 1 = {:?}", store.get(1)?);

    // duplicate ids are refused
    if let Err(e) = store.create(Person::new(1)) {
        println!("duplicate create: {e}");
    }

    // update in place, then delete
    store.update(Person::new(1).with_field("name", "Ada Lovelace"))?;
    let removed = store.delete(2)?;
    println!("removed = {removed:?}");

    println!("len = {}", store.len());
    let contents = std::fs::read_to_string(store.path())?;
    println!("On-disk JSON:\n{contents}");

    let _ = std::fs::remove_file(&path);
    Ok(())
}
