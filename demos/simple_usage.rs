/// appmeta API demo
///
/// Demonstrates the store operations:
/// - Insert application records with their raw payload
/// - Get a payload back by id
/// - Search one field path
/// - Structural search with AND semantics
/// - Statistics

use appmeta::{App, Maintainer, Release, RecordId, Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Creating store...");
    let store = Store::new();

    // Step 1: INSERT
    println!("Step 1: INSERT - Adding records...");
    let apps = [
        App::new("Valid App 1")
            .with_company("Random Inc.")
            .with_maintainer("firstmaintainer app1", "firstmaintainer@hotmail.com")
            .with_maintainer("secondmaintainer app1", "secondmaintainer@gmail.com"),
        App::new("Valid App 2")
            .with_company("Upbound Inc.")
            .with_maintainer("AppTwo Maintainer", "apptwo@upbound.io")
            .with_release(Release::new("0.0.1", Maintainer::new("bob", "bob@upbound.io"))),
    ];
    for app in &apps {
        let raw = serde_json::to_vec_pretty(app)?;
        let id = store.insert(app, raw)?;
        println!("  Inserted '{}' as {}", app.title, id);
    }
    println!();

    // Step 2: GET
    println!("Step 2: GET - Reading raw payloads...");
    let raw = store.get("2".parse()?)?;
    println!("  Record 2: {} bytes", raw.len());
    match store.get(RecordId(99)) {
        Ok(_) => println!("  Record 99 unexpectedly found"),
        Err(e) => println!("  Record 99: {}", e),
    }
    println!();

    // Step 3: SEARCH
    println!("Step 3: SEARCH - Single field path...");
    println!("  title 'valid': {:?}", store.search("valid", &["title"]));
    println!("  title 'valid app 2': {:?}", store.search("valid app 2", &["title"]));
    println!("  maintainers.name 'maintainer': {:?}", store.search("maintainer", &["maintainers", "name"]));
    println!("  unknown field: {:?}", store.search("valid", &["nope"]));
    println!();

    // Step 4: STRUCTURAL SEARCH
    println!("Step 4: STRUCTURAL SEARCH - AND of every field...");
    let query = App::new("valid").with_company("upbound");
    println!("  title=valid AND company=upbound: {:?}", store.search_struct(&query)?);
    let query = App::default().with_release(Release::new("", Maintainer::new("bob", "")));
    println!("  release.author.name=bob: {:?}", store.search_struct(&query)?);
    println!("  empty query: {:?}", store.search_struct(&App::default())?);
    println!();

    // Step 5: STATS
    println!("Step 5: STATISTICS");
    let stats = store.stats();
    println!("  Records:  {}", stats.record_count);
    println!("  Fields:   {}", stats.field_count);
    println!("  Tokens:   {}", stats.token_count);
    println!("  Next id:  {}", stats.next_id);

    Ok(())
}
