// Loads the built cdylib at runtime and calls it only through its exports.

use ffi_greet::host::library::{self, NativeLibrary, LIBRARY_NAME};
use ffi_greet::host::{greet_name, Bindings, BoundaryString, HostError};

fn load_built_library() -> Option<NativeLibrary> {
    let Some(path) = library::resolve_library_path(LIBRARY_NAME, &library::default_search_paths())
    else {
        eprintln!("skipping: {:?} not built", library::library_file_name(LIBRARY_NAME));
        return None;
    };
    Some(NativeLibrary::open(path).expect("built cdylib should load"))
}

#[test]
fn test_dynamic_add() {
    let Some(library) = load_built_library() else {
        return;
    };
    let bindings = Bindings::load(&library).unwrap();
    assert_eq!(bindings.add(4, 5), 9);
    assert_eq!(bindings.add(-7, 7), 0);
}

#[test]
fn test_dynamic_greet() {
    let Some(library) = load_built_library() else {
        return;
    };
    let bindings = Bindings::load(&library).unwrap();
    assert_eq!(greet_name(&bindings, "World").unwrap(), "Hello, World!");
}

#[test]
fn test_dynamic_handle_released_before_unload() {
    let Some(library) = load_built_library() else {
        return;
    };
    let bindings = Bindings::load(&library).unwrap();
    let input = BoundaryString::new("loader").unwrap();
    let output = bindings.greet(&input).unwrap();
    assert_eq!(output.to_str().unwrap(), "Hello, loader!");
    drop(output);
    drop(library);
}

#[test]
fn test_missing_library() {
    let result = NativeLibrary::find(LIBRARY_NAME, &[]);
    assert!(matches!(result, Err(HostError::LibraryNotFound(_))));
}
