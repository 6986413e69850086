//! Procedural macros for the cube-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `name`: Optional. Human readable puzzle name; defaults to the type name
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["parsing"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If it does not, the
/// generated bound check fails with:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use cube_solver::AutoRegisterSolver;
///
/// #[derive(AutoRegisterSolver)]
/// #[puzzle(day = 2, name = "cube-conundrum", tags = ["parsing"])]
/// struct CubeConundrum;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AutoRegisterSolver requires a #[puzzle(...)] attribute",
            )
        })?;

    let mut day: Option<u8> = None;
    let mut puzzle_name: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Int(lit) => day = Some(lit.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "`day` must be an integer")),
            }
        } else if meta.path.is_ident("name") {
            match meta.value()?.parse::<Lit>()? {
                Lit::Str(lit) => puzzle_name = Some(lit.value()),
                other => return Err(syn::Error::new_spanned(other, "`name` must be a string")),
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit) => tags.push(lit.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("expected `day`, `name` or `tags`"));
        }
        Ok(())
    })?;

    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(attr, "`day` must be between 1 and 25"));
    }
    let puzzle_name = puzzle_name.unwrap_or_else(|| name.to_string());

    Ok(quote! {
        // Compile-time check that the type implements Solver
        const _: () = {
            trait MustImplementSolver: ::cube_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::cube_solver::inventory::submit! {
            ::cube_solver::SolverPlugin {
                day: #day,
                name: #puzzle_name,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
