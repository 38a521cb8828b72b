use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::parse::Parser;

/// Generate a partial-update type from a struct listing the channels it can
/// touch.
///
/// Every field is rewritten to a public `Option<T>` and a matching channel
/// enum (`FooPatch` -> `FooChannel`) is generated alongside it. All fields must
/// share one type.
#[proc_macro]
pub fn gen_patch(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.is_empty() {
        return quote! {
            compile_error!("Patches must have named fields, one for each channel.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Patches can not be generic.");
        }
        .into();
    }

    let field_ty = input.fields.iter().next().map(|f| f.ty.clone()).unwrap();

    if input.fields.iter().any(|f| f.ty != field_ty) {
        return quote! {
            compile_error!("All channels of a patch must have the same type.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = field_names.len();

    // Every channel is optional and public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
        let ty = &f.ty;
        f.ty = syn::parse_quote! { Option<#ty> };
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let vis = input.vis.clone();
    let struct_name = input.ident.clone();
    let base_name = struct_name.to_string();
    let base_name = base_name.strip_suffix("Patch").unwrap_or(&base_name);
    let channel_name = syn::Ident::new(&format!("{}Channel", base_name), Span::call_site());

    let variants = field_names
        .iter()
        .map(|n| syn::Ident::new(&n.to_string().to_case(Case::Pascal), n.span()))
        .collect::<Vec<_>>();
    let labels = field_names
        .iter()
        .map(|n| n.to_string().to_case(Case::Lower))
        .collect::<Vec<_>>();
    let with_fns = field_names
        .iter()
        .map(|n| format_ident!("with_{}", n))
        .collect::<Vec<_>>();
    let with_docs = labels
        .iter()
        .map(|l| format!("Set the {} channel of this patch.", l))
        .collect::<Vec<_>>();
    let variant_docs = labels
        .iter()
        .map(|l| format!("The {} channel.", l))
        .collect::<Vec<_>>();
    let channel_doc = format!("A single channel of [`{}`].", struct_name);
    let indices = (0..count).collect::<Vec<usize>>();

    let generated = quote! {
        #[doc = #channel_doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #vis enum #channel_name {
            #(
                #[doc = #variant_docs]
                #variants,
            )*
        }

        impl #channel_name {
            /// Every channel, in declaration order.
            pub const ALL: [Self; #count] = [#(Self::#variants,)*];

            /// Lowercase name of the channel.
            pub fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #labels,)*
                }
            }
        }

        impl #struct_name {
            /// A patch that leaves every channel untouched.
            pub const fn new() -> Self {
                Self {
                    #(#field_names: None,)*
                }
            }

            #(
                #[doc = #with_docs]
                pub fn #with_fns(mut self, value: #field_ty) -> Self {
                    self.#field_names = Some(value);
                    self
                }
            )*

            /// A patch touching only `channel`.
            pub fn single(channel: #channel_name, value: #field_ty) -> Self {
                let mut patch = Self::new();
                patch.set(channel, value);
                patch
            }

            /// Set one channel of the patch.
            pub fn set(&mut self, channel: #channel_name, value: #field_ty) {
                match channel {
                    #(#channel_name::#variants => self.#field_names = Some(value),)*
                }
            }

            /// The value carried for `channel`, if any.
            pub fn get(&self, channel: #channel_name) -> Option<#field_ty> {
                match channel {
                    #(#channel_name::#variants => self.#field_names,)*
                }
            }

            /// True when the patch touches no channel at all.
            pub fn is_empty(&self) -> bool {
                true #(&& self.#field_names.is_none())*
            }

            /// Lay the patch over `current`. Channels the patch does not carry
            /// keep their current value.
            pub fn resolve(&self, current: [#field_ty; #count]) -> [#field_ty; #count] {
                [#(self.#field_names.unwrap_or(current[#indices]),)*]
            }
        }
    };

    quote! {
        #input
        #generated
    }
    .into()
}
