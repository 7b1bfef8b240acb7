mod common;

use common::{Consumer, Event, Rejected, init_logging, module};
use oplog::LoggingProxy;
use oplog_isa::*;

fn const_then_br_table() -> Vec<Operator> {
    vec![
        Operator::I32Const(LiteralImm { value: 42 }),
        Operator::BrTable(BranchTableImm {
            default_target_depth: 1,
            target_depths: vec![0, 2],
        }),
    ]
}

#[test]
fn logs_then_forwards_each_instruction() {
    init_logging();
    let module = module();
    let mut consumer = Consumer::default();
    let mut proxy = LoggingProxy::new(&module, &mut consumer);

    visit_operators(&mut proxy, const_then_br_table()).unwrap();

    let [a, b]: [Operator; 2] = const_then_br_table().try_into().unwrap();
    assert_eq!(
        consumer.events,
        vec![
            Event::Log("i32.const 42".to_string()),
            Event::Visit(a),
            Event::Log("br_table 1 [0,2]".to_string()),
            Event::Visit(b),
        ]
    );
}

#[test]
fn direct_calls_go_through_proxy() {
    let module = module();
    let mut consumer = Consumer::default();
    {
        let mut proxy = LoggingProxy::new(&module, &mut consumer);
        proxy
            .visit_block(ControlStructureImm {
                result_type: ValueType::I64.into(),
            })
            .unwrap();
        proxy.visit_call(CallImm { function_index: 1 }).unwrap();
        proxy.visit_call(CallImm { function_index: 8 }).unwrap();
        proxy
            .visit_call_indirect(CallIndirectImm { type_index: 5 })
            .unwrap();
        proxy
            .visit_local_tee(GetOrSetVariableImm { variable_index: 2 })
            .unwrap();
        proxy.visit_memory_grow(MemoryImm).unwrap();
        proxy.visit_unknown(UnknownImm { raw: 0xc5 }).unwrap();
        proxy.visit_end(NoImm).unwrap();
    }
    assert_eq!(
        consumer.logged(),
        vec![
            "block : i64",
            "call 1 (i32,i32)->i32",
            "call 8 <invalid function index>",
            "call_indirect <invalid type index>",
            "local.tee 2",
            "memory.grow",
            "unknown 0x00c5",
            "end",
        ]
    );
    assert_eq!(consumer.visited().len(), 8);
}

#[test]
fn every_opcode_is_logged_and_forwarded() {
    let module = module();
    let mut consumer = Consumer::default();
    let mut proxy = LoggingProxy::new(&module, &mut consumer);
    for opcode in opcode_table() {
        Operator::with_default_imm(opcode).visit(&mut proxy).unwrap();
    }
    Operator::with_default_imm(Opcode::Unknown)
        .visit(&mut proxy)
        .unwrap();

    let events = &consumer.events;
    assert_eq!(events.len(), 2 * (opcode_count() + 1));
    for pair in events.chunks(2) {
        match pair {
            [Event::Log(text), Event::Visit(operator)] => {
                assert!(
                    text.starts_with(operator.opcode().name()),
                    "'{text}' logged for '{}'",
                    operator.opcode()
                );
                assert_eq!(operator, &Operator::with_default_imm(operator.opcode()));
            }
            other => panic!("log and visit out of order: {other:?}"),
        }
    }
}

#[test]
fn consumer_error_propagates_after_logging() {
    let module = module();
    let mut consumer = Consumer::rejecting(Opcode::BrTable);
    let err = {
        let mut proxy = LoggingProxy::new(&module, &mut consumer);
        visit_operators(&mut proxy, const_then_br_table()).unwrap_err()
    };
    assert_eq!(err, Rejected(Opcode::BrTable));
    assert_eq!(consumer.logged(), vec!["i32.const 42", "br_table 1 [0,2]"]);
    assert_eq!(consumer.visited().len(), 2);
}

#[test]
fn error_stops_dispatch_of_later_instructions() {
    let module = module();
    let mut consumer = Consumer::rejecting(Opcode::I32Const);
    let mut proxy = LoggingProxy::new(&module, &mut consumer);
    let err = visit_operators(&mut proxy, const_then_br_table()).unwrap_err();
    assert_eq!(err, Rejected(Opcode::I32Const));
    assert_eq!(consumer.logged(), vec!["i32.const 42"]);
}

#[test]
fn immediates_are_forwarded_unchanged() {
    let module = module();
    let operators = vec![
        Operator::F32Const(LiteralImm { value: -1.25 }),
        Operator::I64Load32S(LoadOrStoreImm {
            alignment_log2: 2,
            offset: 1024,
        }),
        Operator::BrTable(BranchTableImm {
            default_target_depth: 0,
            target_depths: Vec::new(),
        }),
        Operator::Call(CallImm {
            function_index: u32::MAX,
        }),
    ];
    let mut consumer = Consumer::default();
    visit_operators(&mut LoggingProxy::new(&module, &mut consumer), operators.clone()).unwrap();
    let visited: Vec<Operator> = consumer.visited().into_iter().cloned().collect();
    assert_eq!(visited, operators);
    assert_eq!(
        consumer.logged(),
        vec![
            "f32.const -1.25",
            "i64.load32_s align=4 offset=1024",
            "br_table 0 []",
            "call 4294967295 <invalid function index>",
        ]
    );
}

#[test]
fn owned_consumer_is_recovered() {
    let module = module();
    let mut proxy = LoggingProxy::new(&module, Consumer::default());
    proxy.visit_nop(NoImm).unwrap();
    assert_eq!(proxy.inner().visited().len(), 1);
    proxy.inner_mut().reject = Some(Opcode::Drop);
    assert_eq!(proxy.visit_drop(NoImm), Err(Rejected(Opcode::Drop)));
    assert!(std::ptr::eq(proxy.module(), &module));

    let consumer = proxy.into_inner();
    assert_eq!(consumer.logged(), vec!["nop", "drop"]);
}

#[test]
fn stacked_proxies_log_into_innermost_consumer() {
    let module = module();
    let mut consumer = Consumer::default();
    {
        let inner = LoggingProxy::new(&module, &mut consumer);
        let mut outer = LoggingProxy::new(&module, inner);
        outer
            .visit_br_if(BranchImm { target_depth: 1 })
            .unwrap();
    }
    assert_eq!(
        consumer.events,
        vec![
            Event::Log("br_if 1".to_string()),
            Event::Log("br_if 1".to_string()),
            Event::Visit(Operator::BrIf(BranchImm { target_depth: 1 })),
        ]
    );
}

/// Code written against the visitor interface only.
fn run<V>(visitor: &mut V) -> Result<(), Rejected>
where
    V: OperatorVisitor<Output = Result<(), Rejected>>,
{
    visitor.visit_local_get(GetOrSetVariableImm { variable_index: 0 })?;
    visitor.visit_i32_eqz(NoImm)?;
    visitor.visit_return(NoImm)
}

#[test]
fn proxy_is_a_drop_in_replacement() {
    let module = module();

    let mut plain = Consumer::default();
    run(&mut plain).unwrap();

    let mut wrapped = Consumer::default();
    run(&mut LoggingProxy::new(&module, &mut wrapped)).unwrap();

    assert_eq!(plain.visited(), wrapped.visited());
    assert!(plain.logged().is_empty());
    assert_eq!(wrapped.logged(), vec!["local.get 0", "i32.eqz", "return"]);
}

#[cfg(feature = "simd")]
#[test]
fn simd_instructions_are_logged() {
    let module = module();
    let mut consumer = Consumer::default();
    let operators = vec![
        Operator::I16x8ReplaceLane(LaneIndexImm { lane_index: 7 }),
        Operator::V32x4Swizzle(SwizzleImm {
            lane_indices: [1, 1, 0, 3],
        }),
        Operator::V32x4Shuffle(ShuffleImm {
            lane_indices: [0, 5, 2, 7],
        }),
    ];
    visit_operators(&mut LoggingProxy::new(&module, &mut consumer), operators).unwrap();
    assert_eq!(
        consumer.logged(),
        vec![
            "i16x8.replace_lane 7",
            "v32x4.swizzle [1,1,0,3]",
            "v32x4.shuffle [a0,b5,a2,b7]",
        ]
    );
}
