use crate::types::TypeAnnotation;
use crate::types::TypeExpressionError;

type Result<T> = std::result::Result<T, TypeExpressionError>;

fn no_enums(_: &str) -> bool {
    false
}

#[test]
fn parses_nullable_named_scalar() -> Result<()> {
    let annot = TypeAnnotation::parse("String", no_enums)?;

    assert_eq!(annot.name(), "String");
    assert!(annot.nullable());
    assert!(annot.is_scalar());
    assert!(!annot.is_enum());
    assert!(!annot.is_list());

    Ok(())
}

#[test]
fn trailing_bang_makes_named_type_non_null() -> Result<()> {
    let annot = TypeAnnotation::parse("Int!", no_enums)?;

    assert!(!annot.nullable());
    assert!(annot.is_scalar());
    assert_eq!(annot.to_string(), "Int!");

    Ok(())
}

#[test]
fn list_nullability_is_independent_of_element_nullability() -> Result<()> {
    let nullable_list_of_non_null = TypeAnnotation::parse("[String!]", no_enums)?;
    let non_null_list_of_nullable = TypeAnnotation::parse("[String]!", no_enums)?;
    let non_null_list_of_non_null = TypeAnnotation::parse("[String!]!", no_enums)?;

    let list = nullable_list_of_non_null.as_list_annotation().unwrap();
    assert!(list.nullable());
    assert!(!list.inner_type_annotation().nullable());

    let list = non_null_list_of_nullable.as_list_annotation().unwrap();
    assert!(!list.nullable());
    assert!(list.inner_type_annotation().nullable());

    let list = non_null_list_of_non_null.as_list_annotation().unwrap();
    assert!(!list.nullable());
    assert!(!list.inner_type_annotation().nullable());

    assert!(!nullable_list_of_non_null.is_equivalent_to(&non_null_list_of_nullable));
    assert!(!non_null_list_of_nullable.is_equivalent_to(&non_null_list_of_non_null));
    assert!(non_null_list_of_non_null.is_list());
    assert_eq!(non_null_list_of_non_null.name(), "String");

    Ok(())
}

#[test]
fn nested_lists_round_trip_through_display() -> Result<()> {
    for expr in ["[[Int!]]!", "[[Int]!]", "[Episode]", "Human"] {
        assert_eq!(TypeAnnotation::parse(expr, no_enums)?.to_string(), expr);
    }
    Ok(())
}

#[test]
fn enum_membership_uses_names_known_at_parse_time() -> Result<()> {
    let known = ["Episode"];
    let is_known = |name: &str| known.contains(&name);

    let episode = TypeAnnotation::parse("[Episode!]!", is_known)?;
    assert!(episode.is_enum());
    assert!(!episode.is_scalar());

    let not_yet_declared = TypeAnnotation::parse("Color", is_known)?;
    assert!(!not_yet_declared.is_enum());
    assert!(!not_yet_declared.is_scalar());

    Ok(())
}

#[test]
fn scalar_names_are_never_classified_as_enums() -> Result<()> {
    let annot = TypeAnnotation::parse("String", |_| true)?;
    assert!(annot.is_scalar());
    assert!(!annot.is_enum());
    Ok(())
}

#[test]
fn surrounding_whitespace_is_ignored() -> Result<()> {
    let annot = TypeAnnotation::parse(" [ String ! ] ! ", no_enums)?;
    assert_eq!(annot.to_string(), "[String!]!");
    Ok(())
}

#[test]
fn malformed_expressions_are_rejected() {
    assert_eq!(
        TypeAnnotation::parse("", no_enums),
        Err(TypeExpressionError::EmptyTypeName { expr: "".to_string() }),
    );
    assert_eq!(
        TypeAnnotation::parse("[]", no_enums),
        Err(TypeExpressionError::EmptyTypeName { expr: "[]".to_string() }),
    );
    assert_eq!(
        TypeAnnotation::parse("String!!", no_enums),
        Err(TypeExpressionError::RepeatedNonNullMarker { expr: "String!!".to_string() }),
    );
    assert_eq!(
        TypeAnnotation::parse("[String", no_enums),
        Err(TypeExpressionError::UnbalancedBrackets { expr: "[String".to_string() }),
    );
    assert_eq!(
        TypeAnnotation::parse("[String]]", no_enums),
        Err(TypeExpressionError::UnbalancedBrackets { expr: "[String]]".to_string() }),
    );
    assert_eq!(
        TypeAnnotation::parse("Str-ing", no_enums),
        Err(TypeExpressionError::InvalidTypeName {
            expr: "Str-ing".to_string(),
            name: "Str-ing".to_string(),
        }),
    );
}

#[test]
fn named_annotation_equivalence_ignores_classification_inputs() -> Result<()> {
    let a = TypeAnnotation::parse("Human", no_enums)?;
    let b = TypeAnnotation::parse("Human", |_| false)?;
    let c = TypeAnnotation::parse("Human!", no_enums)?;

    assert!(a.is_equivalent_to(&b));
    assert!(b.is_equivalent_to(&a));
    assert!(!a.is_equivalent_to(&c));

    Ok(())
}
