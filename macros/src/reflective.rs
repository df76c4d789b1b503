use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// Per-field reflection role, parsed from `#[reflective(...)]`.
enum FieldRole {
    Attribute { readonly: bool },
    Base,
    Skip,
}

struct ReflectedField {
    ident: syn::Ident,
    name: String,
    readonly: bool,
}

pub fn expand_derive_reflective(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "Reflective can only be derived for structs with named fields",
                )
                .to_compile_error();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Reflective can only be derived for structs")
                .to_compile_error();
        }
    };

    let mut reflected: Vec<ReflectedField> = Vec::new();
    let mut base: Option<syn::Ident> = None;

    for field in fields {
        let field_ident = match &field.ident {
            Some(field_ident) => field_ident.clone(),
            None => continue,
        };
        let role = match parse_field_role(field) {
            Ok(role) => role,
            Err(error) => return error.to_compile_error(),
        };
        match role {
            FieldRole::Skip => {}
            FieldRole::Base => {
                if base.is_some() {
                    return syn::Error::new_spanned(
                        field,
                        "at most one field may be marked #[reflective(base)]",
                    )
                    .to_compile_error();
                }
                base = Some(field_ident);
            }
            FieldRole::Attribute { readonly } => {
                let name = field_ident.to_string();
                reflected.push(ReflectedField {
                    ident: field_ident,
                    name,
                    readonly,
                });
            }
        }
    }

    let descriptor_entries = reflected.iter().map(|field| {
        let name = &field.name;
        if field.readonly {
            quote! { ::autocopy::AttributeDescriptor::readonly(#name, #ident_str) }
        } else {
            quote! { ::autocopy::AttributeDescriptor::new(#name, #ident_str) }
        }
    });

    let get_arms = reflected.iter().map(|field| {
        let name = &field.name;
        let field_ident = &field.ident;
        quote! { #name => Some(::autocopy::AsValue::as_value(&self.#field_ident)), }
    });

    let set_arms = reflected.iter().map(|field| {
        let name = &field.name;
        let field_ident = &field.ident;
        if field.readonly {
            quote! { #name => Ok(()), }
        } else {
            quote! {
                #name => {
                    self.#field_ident = ::autocopy::FromValue::from_value(value)?;
                    Ok(())
                }
            }
        }
    });

    let base_impl = base.as_ref().map(|base_ident| {
        quote! {
            fn base(&self) -> Option<&dyn ::autocopy::Reflective> {
                Some(&self.#base_ident)
            }

            fn base_mut(&mut self) -> Option<&mut dyn ::autocopy::Reflective> {
                Some(&mut self.#base_ident)
            }
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::autocopy::Reflective for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #ident_str
            }

            fn local_attributes(&self) -> Vec<::autocopy::AttributeDescriptor> {
                const LOCAL: &[::autocopy::AttributeDescriptor] = &[
                    #(#descriptor_entries),*
                ];
                #[allow(unused_imports)]
                use ::autocopy::probe::ExtensionFallback as _;
                let probe = ::autocopy::probe::CapabilityProbe::<Self>::new();
                let mut attributes = LOCAL.to_vec();
                attributes.extend_from_slice(probe.probe_extension_attributes());
                attributes
            }

            #base_impl

            fn get(&self, name: &str) -> Option<::autocopy::Value> {
                match name {
                    #(#get_arms)*
                    _ => {
                        #[allow(unused_imports)]
                        use ::autocopy::probe::ExtensionFallback as _;
                        let probe = ::autocopy::probe::CapabilityProbe::<Self>::new();
                        if let Some(value) = probe.probe_extension_get(self, name) {
                            return Some(value);
                        }
                        match ::autocopy::Reflective::base(self) {
                            Some(ancestor) => ancestor.get(name),
                            None => None,
                        }
                    }
                }
            }

            fn set(
                &mut self,
                name: &str,
                value: ::autocopy::Value,
            ) -> Result<(), ::autocopy::AssignError> {
                match name {
                    #(#set_arms)*
                    _ => {
                        #[allow(unused_imports)]
                        use ::autocopy::probe::ExtensionFallback as _;
                        let probe = ::autocopy::probe::CapabilityProbe::<Self>::new();
                        if let Some(descriptor) = probe
                            .probe_extension_attributes()
                            .iter()
                            .find(|descriptor| descriptor.name == name)
                        {
                            if !descriptor.mutable {
                                return Ok(());
                            }
                            return probe.probe_extension_set(self, name, value);
                        }
                        match ::autocopy::Reflective::base_mut(self) {
                            Some(ancestor) => ancestor.set(name, value),
                            None => Err(::autocopy::AssignError::UnknownAttribute {
                                name: name.to_string(),
                            }),
                        }
                    }
                }
            }

            fn construct_default(&self) -> Option<Box<dyn ::autocopy::Reflective>> {
                #[allow(unused_imports)]
                use ::autocopy::probe::ConstructFallback as _;
                ::autocopy::probe::CapabilityProbe::<Self>::new().probe_default()
            }

            fn has_native_copy(&self) -> bool {
                #[allow(unused_imports)]
                use ::autocopy::probe::NativeCopyFallback as _;
                ::autocopy::probe::CapabilityProbe::<Self>::new().probe_has_native_copy()
            }

            fn try_native_copy(&self) -> Option<Box<dyn ::autocopy::Reflective>> {
                #[allow(unused_imports)]
                use ::autocopy::probe::NativeCopyFallback as _;
                ::autocopy::probe::CapabilityProbe::<Self>::new().probe_native_copy(self)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
                self
            }

            fn into_any_arc(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::core::any::Any + Send + Sync> {
                self
            }
        }
    }
}

fn parse_field_role(field: &syn::Field) -> syn::Result<FieldRole> {
    let mut skip = false;
    let mut readonly = false;
    let mut is_base = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("reflective") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("readonly") {
                readonly = true;
                Ok(())
            } else if meta.path.is_ident("base") {
                is_base = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip`, `readonly`, or `base`"))
            }
        })?;
    }

    if is_base && (skip || readonly) {
        return Err(syn::Error::new_spanned(
            field,
            "#[reflective(base)] cannot be combined with `skip` or `readonly`",
        ));
    }
    if skip && readonly {
        return Err(syn::Error::new_spanned(
            field,
            "#[reflective(skip)] cannot be combined with `readonly`",
        ));
    }

    Ok(if is_base {
        FieldRole::Base
    } else if skip {
        FieldRole::Skip
    } else {
        FieldRole::Attribute { readonly }
    })
}
