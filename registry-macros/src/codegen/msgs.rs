// Centralized compile-time diagnostic strings for the #[component] codegen layer.

pub(super) const ERR_COMPONENT_TARGET: &str =
    "#[component] only supports zero-argument free functions";
pub(super) const ERR_UNKNOWN_ARG: &str =
    "unknown #[component] argument; expected `name = \"...\"` or `primary`";
pub(super) const ERR_NAME_DUP: &str = "`name` given more than once";
pub(super) const ERR_NAME_EMPTY: &str = "component name must not be empty";
pub(super) const ERR_PRIMARY_DUP: &str = "`primary` given more than once";

pub(super) const ERR_FN_ARGS: &str = "#[component] function must not take parameters";
pub(super) const ERR_FN_ASYNC: &str = "#[component] function cannot be async";
pub(super) const ERR_FN_UNSAFE: &str = "#[component] function cannot be unsafe";
pub(super) const ERR_FN_GENERICS: &str = "#[component] function cannot be generic";
pub(super) const ERR_FN_NO_RETURN: &str = "#[component] function must return the component value \
     (T, Arc<T>, Result<T> or Result<Arc<T>>)";
