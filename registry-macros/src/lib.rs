use proc_macro::TokenStream;

mod codegen;

/// 声明组件定义：标注在无参函数上，返回值类型即能力类型。
///
/// ```ignore
/// #[mmg_registry::component(name = "fooRestTemplate", primary)]
/// fn foo_rest_template() -> RestClient { RestClient::with_connect_timeout(Duration::from_secs(10)) }
/// ```
///
/// - `name = "..."`：组件名；缺省为函数名
/// - `primary` / `primary = true|false`：无名解析时的默认目标
/// - 返回 `T` / `Arc<T>` / `Result<T, E>` / `Result<Arc<T>, E>`，能力类型均为 `T`
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::entrypoint(args, input)
}
