use super::*;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;
use tracing::*;

/// Build the full molecule for a parsed name, with one node per atom.
///
/// Hydrogens are the same implicit counts the diagram shows, so the
/// graph and the drawing always agree on what was drawn.
pub fn molecule_graph(parsed: &ParsedName) -> Result<MoleculeGraph> {
    let plan = AttachmentPlan::new(parsed)?;
    let mut graph = MoleculeGraph::new_undirected();

    let backbone: Vec<NodeIndex> = plan.carbons.iter().map(|_| graph.add_node(Element::C)).collect();
    for (index, pair) in backbone.windows(2).enumerate() {
        let bond = if index as u32 + 1 == parsed.chain.bond_locant {
            parsed.chain.bond
        } else {
            Bond::Single
        };
        graph.add_edge(pair[0], pair[1], bond);
    }

    for (carbon, &node) in plan.carbons.iter().zip(&backbone) {
        add_hydrogens(&mut graph, node, carbon.hydrogens);
        for &(_, substituent) in &carbon.attachments {
            add_substituent(&mut graph, node, substituent);
        }
    }

    debug!(
        "Built molecule with {} atoms and {} bonds",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn add_hydrogens(graph: &mut MoleculeGraph, node: NodeIndex, count: usize) {
    for _ in 0..count {
        let hydrogen = graph.add_node(Element::H);
        graph.add_edge(node, hydrogen, Bond::Single);
    }
}

fn add_substituent(graph: &mut MoleculeGraph, node: NodeIndex, substituent: Substituent) {
    match substituent {
        Substituent::Halogen(element) => {
            let atom = graph.add_node(element);
            graph.add_edge(node, atom, Bond::Single);
        }
        Substituent::Hydroxyl => {
            let oxygen = graph.add_node(Element::O);
            graph.add_edge(node, oxygen, Bond::Single);
            add_hydrogens(graph, oxygen, 1);
        }
        Substituent::AlkylBranch(carbons) => {
            let mut previous = node;
            for k in 0..carbons {
                let carbon = graph.add_node(Element::C);
                graph.add_edge(previous, carbon, Bond::Single);
                add_hydrogens(graph, carbon, branch_hydrogens(k, carbons));
                previous = carbon;
            }
        }
    }
}

/// The molecular formula in Hill order: carbon, hydrogen, then the rest
/// alphabetically, with counts of one left out.
pub fn molecular_formula(graph: &MoleculeGraph) -> String {
    let mut counts = BTreeMap::new();
    for node in graph.node_indices() {
        *counts.entry(graph[node].symbol()).or_insert(0usize) += 1;
    }

    let mut formula = String::new();
    let mut push = |symbol: &str, count: usize| {
        formula.push_str(symbol);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    };
    for symbol in ["C", "H"] {
        if let Some(count) = counts.remove(symbol) {
            push(symbol, count);
        }
    }
    for (symbol, count) in counts {
        push(symbol, count);
    }
    formula
}

/// Export the molecule as Graphviz DOT text.
///
/// Double and triple bonds become two or three parallel edges between the
/// same atoms.
pub fn to_dot(graph: &MoleculeGraph) -> String {
    let mut dot = String::from("graph Molecule {\n");
    dot.push_str("    layout=neato;\n");
    dot.push_str("    multiedge=true;\n");

    for node in graph.node_indices() {
        let element = graph[node];
        dot.push_str(&format!(
            "    {} [label=\"{}\", fontcolor=white, shape=circle, style=filled, fillcolor={}];\n",
            node.index(),
            element.symbol(),
            element_color(element)
        ));
    }

    for edge in graph.edge_references() {
        for _ in 0..edge.weight().order() {
            dot.push_str(&format!(
                "    {} -- {} [penwidth=2.0];\n",
                edge.source().index(),
                edge.target().index()
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

fn element_color(element: Element) -> &'static str {
    match element {
        Element::C => "black",
        Element::H => "gray",
        Element::O => "red",
        Element::F => "pink",
        Element::Cl => "darkgreen",
        Element::Br => "brown",
        Element::I => "purple",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(name: &str) -> String {
        let parsed = parse_name(name).unwrap();
        molecular_formula(&molecule_graph(&parsed).unwrap())
    }

    #[test]
    fn test_formula_matches_diagram_hydrogens() {
        assert_eq!(formula("1,2-dichloro-2,3-dibromobutan"), "C4H6Br2Cl2");
        assert_eq!(formula("2-chlorobutan"), "C4H9Cl");
        assert_eq!(formula("metan"), "CH4");
        assert_eq!(formula("propan-2-ol"), "C3H8O");
        assert_eq!(formula("1-jodo-1-fluorometan"), "CH2FI");
    }

    #[test]
    fn test_alkyl_branch_atoms() {
        // 2-methylpropane: four carbons, ten hydrogens
        assert_eq!(formula("2-metylopropan"), "C4H10");
        assert_eq!(formula("3-etylopentan"), "C7H16");
    }

    #[test]
    fn test_chain_bond_order() {
        let parsed = parse_name("but-2-en").unwrap();
        let graph = molecule_graph(&parsed).unwrap();
        let doubles: Vec<_> = graph
            .edge_references()
            .filter(|edge| *edge.weight() == Bond::Double)
            .map(|edge| (edge.source().index(), edge.target().index()))
            .collect();
        assert_eq!(doubles, vec![(1, 2)]);
    }

    #[test]
    fn test_graph_rejects_overflow() {
        let parsed = parse_name("2,2,2-trichlorobutan").unwrap();
        assert!(matches!(molecule_graph(&parsed), Err(Error::ValenceOverflow { .. })));
    }

    #[test]
    fn test_dot_export() {
        let parsed = parse_name("et-1-yn").unwrap();
        let graph = molecule_graph(&parsed).unwrap();
        let dot = to_dot(&graph);

        assert!(dot.starts_with("graph Molecule {"));
        assert!(dot.trim_end().ends_with('}'));
        assert_eq!(dot.matches("0 -- 1 ").count(), 3);
        assert_eq!(dot.matches("label=\"C\"").count(), 2);
        assert_eq!(dot.matches("label=\"H\"").count(), graph.node_count() - 2);
    }
}
