use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use rigging::{bind, shared, Binding, Container, Inject, InstantiatorResult, Strategy};

trait DatabaseProvider {
    /// Records the statement and returns how many statements this database
    /// has served so far.
    fn query(&self, statement: &str) -> usize;
}

trait PrinterProvider {
    fn print(&self, message: &str) -> usize;
}

trait ProgramProvider {
    fn run(&self) -> usize;
}

type DynDatabase = dyn DatabaseProvider + Send + Sync;
type DynPrinter = dyn PrinterProvider + Send + Sync;
type DynProgram = dyn ProgramProvider + Send + Sync;

#[derive(Default)]
struct DummyDatabase {
    statements: AtomicUsize,
}

impl DatabaseProvider for DummyDatabase {
    fn query(&self, _statement: &str) -> usize {
        self.statements.fetch_add(1, Ordering::SeqCst) + 1
    }
}

struct LogPrinter {
    db: Arc<DynDatabase>,
}

impl PrinterProvider for LogPrinter {
    fn print(&self, message: &str) -> usize {
        self.db.query(message)
    }
}

struct Program {
    db: Arc<DynDatabase>,
    printer: Arc<DynPrinter>,
}

impl ProgramProvider for Program {
    fn run(&self) -> usize {
        self.printer.print("starting up");
        self.db.query("select 1")
    }
}

fn new_printer(Inject(db): Inject<DynDatabase>) -> InstantiatorResult<Arc<DynPrinter>> {
    Ok(shared!(LogPrinter { db }; PrinterProvider + Send + Sync))
}

fn new_program(
    Inject(db): Inject<DynDatabase>,
    Inject(printer): Inject<DynPrinter>,
) -> InstantiatorResult<Arc<DynProgram>> {
    Ok(shared!(Program { db, printer }; ProgramProvider + Send + Sync))
}

fn init_container() -> Container {
    let container = Container::new();
    container.must_register(bind!(DatabaseProvider => DummyDatabase));
    container.must_register(Binding::to_factory(new_printer));
    container.must_register(Binding::to_factory(new_program));
    container
}

#[test]
fn test_program_routes_through_shared_database() {
    let container = init_container();

    let program = container.get::<DynProgram>().unwrap();

    // The printer's query and the program's own query hit one database
    // instance, so the program observes both statements.
    assert_eq!(program.run(), 2);

    // Resolving the database directly yields that same instance.
    let db = container.get::<DynDatabase>().unwrap();
    assert_eq!(db.query("select 2"), 3);
}

#[test]
fn test_parsed_strategy_resolves_through_public_api() {
    let container = init_container();

    let singleton: Strategy = "s".parse().unwrap();
    let transient: Strategy = "trans".parse().unwrap();

    let program = container.get_with::<DynProgram>(singleton).unwrap();
    let program_again = container.get_with::<DynProgram>(singleton).unwrap();
    let fresh = container.get_with::<DynProgram>(transient).unwrap();

    assert!(Arc::ptr_eq(&program, &program_again));
    assert!(!Arc::ptr_eq(&program, &fresh));

    // Both programs still share the one database.
    program.run();
    assert_eq!(fresh.run(), 4);
}

#[test]
fn test_teardown_disposes_program_before_database() {
    let disposed = Arc::new(std::sync::Mutex::new(Vec::new()));

    let container = init_container();
    container.must_register(
        bind!(DatabaseProvider => DummyDatabase).with_disposer({
            let disposed = disposed.clone();
            move |_: Arc<DynDatabase>| {
                disposed.lock().unwrap().push("database");
                Ok(())
            }
        }),
    );
    container.must_register(Binding::to_factory(new_program).with_disposer({
        let disposed = disposed.clone();
        move |_: Arc<DynProgram>| {
            disposed.lock().unwrap().push("program");
            Ok(())
        }
    }));

    container.must_get::<DynProgram>().run();

    container.teardown().unwrap();

    // Reverse construction order: the program goes down before the database
    // it depends on; the printer registered no disposer.
    assert_eq!(*disposed.lock().unwrap(), ["program", "database"]);
}
