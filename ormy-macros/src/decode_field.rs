use syn::{Field, Ident, LitStr, ext::IdentExt, parse::ParseBuffer};

pub(crate) struct FieldMetadata {
    pub(crate) ident: Ident,
    pub(crate) name: String,
    pub(crate) column: String,
}

pub(crate) fn decode_field(field: &Field) -> FieldMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Record fields are expected to have a name");
    let name = ident.unraw().to_string();
    let mut metadata = FieldMetadata {
        ident,
        column: name.clone(),
        name,
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("ormy") {
            let Ok(list) = meta.require_list() else {
                panic!("Error while parsing `ormy`, use it like: `#[ormy(name = \"my_column\")]`");
            };
            let result = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("name") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!(
                            "Error while parsing `name`, use it like: `#[ormy(name = \"my_column\")]`"
                        );
                    };
                    metadata.column = v.value();
                    Ok(())
                } else {
                    Err(arg.error(format!(
                        "Unknown attribute `{}` inside ormy macro",
                        arg.path
                            .get_ident()
                            .map(ToString::to_string)
                            .unwrap_or_default()
                    )))
                }
            });
            if let Err(e) = result {
                panic!("{}", e);
            }
        }
    }
    metadata
}
