//! Property tests for edge bookkeeping.
//!
//! Applies random sequences of rewiring operations and checks that the
//! out-edge and in-edge views of the arena never disagree. The operations
//! cover data operands, argument lists, control successors, branch and merge
//! associations, and phi operand lists. Many generated operations are
//! rejected by kind checks; a rejected operation must leave the arena as it
//! was.

use proptest::prelude::*;
use vertex_ir::{
    ir::{BinaryOperator, PhiOperand, Slot, VertexRef},
    Ir, Vertex,
};

const BINARIES: usize = 3;
const CALLS: usize = 2;
const LITERALS: usize = 4;
const PHIS: usize = 2;
const CONTROLS: usize = 8;

/// Control vertices in pool order.
fn control_vertices() -> Vec<Vertex> {
    vec![
        Vertex::pass(),
        Vertex::pass(),
        Vertex::branch(),
        Vertex::block_begin(),
        Vertex::block_begin(),
        Vertex::block_end(),
        Vertex::block_end(),
        Vertex::merge(),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    SetLeft(usize, Option<usize>),
    SetRight(usize, Option<usize>),
    SetCallee(usize, Option<usize>),
    PushArg(usize, usize),
    InsertArg(usize, usize, usize),
    SetArg(usize, usize, usize),
    RemoveArg(usize, usize),
    SetControl(usize, Slot, Option<usize>),
    SetPhiMerge(usize, Option<usize>),
    InsertPhi(usize, usize, usize, usize),
    RemovePhi(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let literal = 0..LITERALS;
    let control = 0..CONTROLS;
    let control_slot =
        prop::sample::select(vec![Slot::Next, Slot::True, Slot::False, Slot::Branch]);
    prop_oneof![
        (0..BINARIES, proptest::option::of(literal.clone())).prop_map(|(b, t)| Op::SetLeft(b, t)),
        (0..BINARIES, proptest::option::of(literal.clone())).prop_map(|(b, t)| Op::SetRight(b, t)),
        (0..CALLS, proptest::option::of(literal.clone())).prop_map(|(c, t)| Op::SetCallee(c, t)),
        (0..CALLS, literal.clone()).prop_map(|(c, t)| Op::PushArg(c, t)),
        (0..CALLS, 0..4usize, literal.clone()).prop_map(|(c, i, t)| Op::InsertArg(c, i, t)),
        (0..CALLS, 0..4usize, literal.clone()).prop_map(|(c, i, t)| Op::SetArg(c, i, t)),
        (0..CALLS, 0..4usize).prop_map(|(c, i)| Op::RemoveArg(c, i)),
        (control.clone(), control_slot, proptest::option::of(control.clone()))
            .prop_map(|(s, slot, t)| Op::SetControl(s, slot, t)),
        (0..PHIS, proptest::option::of(control.clone())).prop_map(|(p, t)| Op::SetPhiMerge(p, t)),
        (0..PHIS, 0..4usize, literal, control).prop_map(|(p, i, v, b)| Op::InsertPhi(p, i, v, b)),
        (0..PHIS, 0..4usize).prop_map(|(p, i)| Op::RemovePhi(p, i)),
    ]
}

struct Pool {
    binaries: Vec<VertexRef>,
    calls: Vec<VertexRef>,
    literals: Vec<VertexRef>,
    controls: Vec<VertexRef>,
    phis: Vec<VertexRef>,
}

fn pool(ir: &mut Ir) -> Pool {
    Pool {
        binaries: (0..BINARIES)
            .map(|_| ir.create(Vertex::binary(BinaryOperator::Add)))
            .collect(),
        calls: (0..CALLS).map(|_| ir.create(Vertex::call())).collect(),
        literals: (0..LITERALS)
            .map(|i| ir.create(Vertex::literal(i as i32)))
            .collect(),
        controls: control_vertices()
            .into_iter()
            .map(|vertex| ir.create(vertex))
            .collect(),
        phis: (0..PHIS).map(|_| ir.create(Vertex::phi())).collect(),
    }
}

fn apply(ir: &mut Ir, pool: &Pool, op: &Op) {
    let lit = |i: usize| pool.literals[i];
    let ctl = |i: usize| pool.controls[i];
    // Out-of-range indices and kind mismatches are expected to fail without side effects.
    let _ = match *op {
        Op::SetLeft(b, t) => ir.set_operand(pool.binaries[b], Slot::Left, t.map(lit)),
        Op::SetRight(b, t) => ir.set_operand(pool.binaries[b], Slot::Right, t.map(lit)),
        Op::SetCallee(c, t) => ir.set_operand(pool.calls[c], Slot::Callee, t.map(lit)),
        Op::PushArg(c, t) => ir.push_arg(pool.calls[c], lit(t)),
        Op::InsertArg(c, i, t) => ir.insert_arg(pool.calls[c], i, lit(t)),
        Op::SetArg(c, i, t) => ir.set_arg(pool.calls[c], i, lit(t)),
        Op::RemoveArg(c, i) => ir.remove_arg(pool.calls[c], i).map(|_| ()),
        Op::SetControl(c, slot, t) => ir.set_operand(ctl(c), slot, t.map(ctl)),
        Op::SetPhiMerge(p, t) => ir.set_operand(pool.phis[p], Slot::Merge, t.map(ctl)),
        Op::InsertPhi(p, i, v, b) => {
            ir.insert_phi_operand(pool.phis[p], i, PhiOperand::new(lit(v), ctl(b)))
        }
        Op::RemovePhi(p, i) => ir.remove_phi_operand(pool.phis[p], i).map(|_| ()),
    };
}

fn assert_symmetric(ir: &Ir) -> Result<(), TestCaseError> {
    let mut out_total = 0;
    let mut in_total = 0;

    for vertex in ir.vertices() {
        for edge_ref in vertex.out_edges() {
            let edge = ir.edge(edge_ref);
            prop_assert!(edge.is_some(), "dangling out-edge {}", edge_ref);
            if let Some(edge) = edge {
                prop_assert_eq!(edge.source(), vertex.handle());
                prop_assert!(ir[edge.target()].in_edges().contains(&edge_ref));
            }
            out_total += 1;
        }
        for edge_ref in vertex.in_edges() {
            prop_assert_eq!(ir.target(*edge_ref), Some(vertex.handle()));
            let source = ir.source(*edge_ref);
            prop_assert!(source.is_some());
            if let Some(source) = source {
                prop_assert!(ir[source].out_edges().contains(edge_ref));
            }
            in_total += 1;
        }
    }

    prop_assert_eq!(out_total, in_total);
    prop_assert_eq!(out_total, ir.edge_count());
    Ok(())
}

proptest! {
    #[test]
    fn edges_stay_symmetric(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut ir = Ir::new();
        let pool = pool(&mut ir);
        for op in &ops {
            apply(&mut ir, &pool, op);
            assert_symmetric(&ir)?;
        }
    }

    #[test]
    fn lists_match_vec_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut ir = Ir::new();
        let pool = pool(&mut ir);
        let mut model: Vec<Vec<VertexRef>> = vec![Vec::new(); CALLS];
        let mut phi_model: Vec<Vec<PhiOperand>> = vec![Vec::new(); PHIS];

        for op in &ops {
            match *op {
                Op::PushArg(c, t) => model[c].push(pool.literals[t]),
                Op::InsertArg(c, i, t) if i <= model[c].len() => {
                    model[c].insert(i, pool.literals[t]);
                }
                Op::SetArg(c, i, t) if i < model[c].len() => model[c][i] = pool.literals[t],
                Op::RemoveArg(c, i) if i < model[c].len() => {
                    model[c].remove(i);
                }
                Op::InsertPhi(p, i, v, b) if i <= phi_model[p].len() => {
                    phi_model[p].insert(i, PhiOperand::new(pool.literals[v], pool.controls[b]));
                }
                Op::RemovePhi(p, i) if i < phi_model[p].len() => {
                    phi_model[p].remove(i);
                }
                _ => {}
            }
            apply(&mut ir, &pool, op);
        }

        for (c, call) in pool.calls.iter().enumerate() {
            prop_assert_eq!(&ir.args(*call), &model[c]);
        }
        for (p, phi) in pool.phis.iter().enumerate() {
            prop_assert_eq!(&ir.phi_operands(*phi), &phi_model[p]);
        }
    }
}
