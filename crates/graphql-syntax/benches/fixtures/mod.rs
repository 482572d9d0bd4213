use std::fmt::Write;

pub const SMALL_SCHEMA: &str = include_str!("small_schema.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");

/// Generates a schema with `type_count` object types, each with a handful
/// of described, directived fields referencing its neighbors.
pub fn synthetic_schema(type_count: usize) -> String {
    let mut out = String::with_capacity(type_count * 220);
    out.push_str("type Query {\n");
    for i in 0..type_count {
        writeln!(out, "  entity{i}(id: ID!): Entity{i}").unwrap();
    }
    out.push_str("}\n\n");

    for i in 0..type_count {
        let next = (i + 1) % type_count;
        writeln!(out, "\"Entity number {i}.\"").unwrap();
        writeln!(out, "type Entity{i} implements Node {{").unwrap();
        out.push_str("  id: ID!\n");
        writeln!(out, "  name: String @deprecated(reason: \"old\")")
            .unwrap();
        writeln!(out, "  next: Entity{next}!").unwrap();
        writeln!(out, "  related(first: Int = 5): [Entity{next}!]")
            .unwrap();
        out.push_str("}\n\n");
    }
    out.push_str("interface Node { id: ID! }\n");
    out
}

/// Generates a query with `depth` nested selection sets.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 20 + 32);
    out.push_str("query Nested { root");
    for _ in 0..depth {
        out.push_str(" { id child");
    }
    out.push_str(" { id }");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out.push_str(" }\n");
    out
}
