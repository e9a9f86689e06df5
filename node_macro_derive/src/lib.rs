use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Generates the `token()` accessor for an AST node struct.
///
/// Every node struct stores the token that introduced it in a field named
/// `token`; deriving `NodeMacro` exposes it without repeating the same
/// two-line accessor on a dozen structs.
#[proc_macro_derive(NodeMacro)]
pub fn node_macro_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_node_macro(&ast)
}

fn impl_node_macro(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    let gen = quote! {
        impl #name {
            /// The token that introduced this node.
            pub fn token(&self) -> &Token {
                &self.token
            }
        }
    };
    gen.into()
}
