//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Route native dialog outcomes into the core prompt capabilities.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Item ids cross the boundary as UTF-8 uuid strings with stable meaning.
//! - The host renders dialogs; core only ever sees their outcome.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use twodo_core::kv::SqliteKeyValueStore;
use twodo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_kv,
    ping as ping_inner, Category, HostConfirmed, HostProvidedText, ItemId, PersistenceGateway,
    TodoService,
};
use uuid::Uuid;

const DB_FILE_NAME: &str = "twodo.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One to-do item as rendered by the host list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemView {
    /// Stable item id in string form.
    pub item_id: String,
    /// Entry text.
    pub text: String,
    /// Partition name (`today|work`).
    pub category: String,
    /// Completion flag (host renders strike-through when set).
    pub is_complete: bool,
}

/// Listing envelope: the active partition and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Items of the active partition, in store order.
    pub items: Vec<TodoItemView>,
    /// Active partition name (`today|work`).
    pub active_category: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Optional affected item ID.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, item_id: Option<String>) -> Self {
        Self {
            ok: true,
            item_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Returns the active partition and its items.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Never panics.
/// - Returns an empty listing with a diagnostic message on storage failure.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    match with_service(|service| list_snapshot(service)) {
        Ok(response) => response,
        Err(err) => TodoListResponse {
            items: Vec::new(),
            active_category: Category::default().as_wire_str().to_string(),
            message: format!("todo_list failed: {err}"),
        },
    }
}

/// Adds an item under the active partition.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Leading/trailing whitespace is trimmed before insert.
/// - Empty text adds nothing and reports `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> TodoActionResponse {
    match with_service(|service| service.add_item(text.trim())) {
        Ok(Some(id)) => TodoActionResponse::success("Item added.", Some(id.to_string())),
        Ok(None) => TodoActionResponse::failure("Nothing added; text was empty."),
        Err(err) => TodoActionResponse::failure(format!("todo_add failed: {err}")),
    }
}

/// Flips the completion flag of one item.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Never panics.
/// - Unknown ids report `ok=false`; the host only ever sends listed ids.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle_complete(item_id: String) -> TodoActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return TodoActionResponse::failure(message),
    };

    match with_service(|service| service.toggle_complete(id)) {
        Ok(Ok(is_complete)) => {
            let state = if is_complete { "complete" } else { "open" };
            TodoActionResponse::success(format!("Item is now {state}."), Some(item_id))
        }
        Ok(Err(err)) => TodoActionResponse::failure(format!("todo_toggle_complete failed: {err}")),
        Err(err) => TodoActionResponse::failure(format!("todo_toggle_complete failed: {err}")),
    }
}

/// Applies the outcome of the host's edit dialog to one item.
///
/// `new_text = None` carries a cancelled dialog; the item stays unchanged.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_edit(item_id: String, new_text: Option<String>) -> TodoActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return TodoActionResponse::failure(message),
    };

    let prompt = HostProvidedText(new_text);
    match with_service(|service| service.edit_item(id, &prompt)) {
        Ok(Ok(true)) => TodoActionResponse::success("Item updated.", Some(item_id)),
        Ok(Ok(false)) => TodoActionResponse::success("Edit cancelled.", Some(item_id)),
        Ok(Err(err)) => TodoActionResponse::failure(format!("todo_edit failed: {err}")),
        Err(err) => TodoActionResponse::failure(format!("todo_edit failed: {err}")),
    }
}

/// Applies the verdict of the host's delete confirmation to one item.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - `confirmed = false` never mutates state.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(item_id: String, confirmed: bool) -> TodoActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return TodoActionResponse::failure(message),
    };

    match with_service(|service| service.delete_item(id, &HostConfirmed(confirmed))) {
        Ok(true) => TodoActionResponse::success("Item deleted.", Some(item_id)),
        Ok(false) => TodoActionResponse::success("Nothing deleted.", Some(item_id)),
        Err(err) => TodoActionResponse::failure(format!("todo_delete failed: {err}")),
    }
}

/// Switches to the other partition and returns its listing.
///
/// # FFI contract
/// - Sync call, storage-backed execution.
/// - Items are never modified; only the persisted active-partition flag.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_flip_category() -> TodoListResponse {
    match with_service(|service| {
        service.flip_category();
        list_snapshot(service)
    }) {
        Ok(response) => response,
        Err(err) => TodoListResponse {
            items: Vec::new(),
            active_category: Category::default().as_wire_str().to_string(),
            message: format!("todo_flip_category failed: {err}"),
        },
    }
}

fn list_snapshot(service: &TodoService<SqliteKeyValueStore>) -> TodoListResponse {
    let items: Vec<TodoItemView> = service
        .visible_items()
        .map(|(id, item)| TodoItemView {
            item_id: id.to_string(),
            text: item.text.clone(),
            category: item.category.as_wire_str().to_string(),
            is_complete: item.is_complete,
        })
        .collect();

    let message = if items.is_empty() {
        "No items.".to_string()
    } else {
        format!("{} item(s).", items.len())
    };

    TodoListResponse {
        items,
        active_category: service.active_category().as_wire_str().to_string(),
        message,
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid item id `{raw}`"))
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TWODO_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_service<T>(
    f: impl FnOnce(&mut TodoService<SqliteKeyValueStore>) -> T,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let storage = open_kv(&db_path).map_err(|err| {
        warn!(
            "event=ffi_storage_open module=ffi status=error path={} error={err}",
            db_path.display()
        );
        format!("storage open failed: {err}")
    })?;

    let mut service = TodoService::hydrate(PersistenceGateway::new(storage));
    Ok(f(&mut service))
}
