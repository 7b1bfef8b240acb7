//! The operator table.
//!
//! Every opcode is listed exactly once, here. Everything else that needs to
//! enumerate opcodes (the [`Opcode`](crate::Opcode) enum, the
//! [`OperatorVisitor`](crate::OperatorVisitor) trait, [`Operator`](crate::Operator),
//! and any visitor implemented outside this crate) is generated by passing a
//! macro to [`for_each_operator!`](crate::for_each_operator).
//!
//! The callback macro receives one entry per opcode in this form:
//!
//! ```text
//! <encoding> <Variant> => <visit_method> "<mnemonic>" <ImmediateType> [<FLAG> | ...]
//! ```
//!
//! A callback that only forwards to an inner visitor can match it with:
//!
//! ```
//! macro_rules! count_operators {
//!     ($( $code:literal $op:ident => $visit:ident $name:literal $imm:ty [$($flag:ident)|*] )*) => {
//!         [$( stringify!($op) ),*].len()
//!     };
//! }
//! assert_eq!(oplog_isa::for_each_operator!(count_operators), oplog_isa::opcode_count());
//! ```

/// Single-byte MVP operators, followed by any extra entries the caller
/// appends.
#[doc(hidden)]
#[macro_export]
macro_rules! __for_each_mvp_operator {
    ($mac:ident $($extra:tt)*) => {
        $mac! {
            0x00 Unreachable => visit_unreachable "unreachable" $crate::NoImm [CONTROL | TERMINATOR]
            0x01 Nop => visit_nop "nop" $crate::NoImm []
            0x02 Block => visit_block "block" $crate::ControlStructureImm [CONTROL]
            0x03 Loop => visit_loop "loop" $crate::ControlStructureImm [CONTROL]
            0x04 If => visit_if "if" $crate::ControlStructureImm [CONTROL]
            0x05 Else => visit_else "else" $crate::NoImm [CONTROL]
            0x0b End => visit_end "end" $crate::NoImm [CONTROL]
            0x0c Br => visit_br "br" $crate::BranchImm [CONTROL | BRANCH | TERMINATOR]
            0x0d BrIf => visit_br_if "br_if" $crate::BranchImm [CONTROL | BRANCH]
            0x0e BrTable => visit_br_table "br_table" $crate::BranchTableImm [CONTROL | BRANCH | TERMINATOR]
            0x0f Return => visit_return "return" $crate::NoImm [CONTROL | TERMINATOR]
            0x10 Call => visit_call "call" $crate::CallImm [CALL]
            0x11 CallIndirect => visit_call_indirect "call_indirect" $crate::CallIndirectImm [CALL]
            0x1a Drop => visit_drop "drop" $crate::NoImm []
            0x1b Select => visit_select "select" $crate::NoImm []
            0x20 LocalGet => visit_local_get "local.get" $crate::GetOrSetVariableImm [VARIABLE]
            0x21 LocalSet => visit_local_set "local.set" $crate::GetOrSetVariableImm [VARIABLE]
            0x22 LocalTee => visit_local_tee "local.tee" $crate::GetOrSetVariableImm [VARIABLE]
            0x23 GlobalGet => visit_global_get "global.get" $crate::GetOrSetVariableImm [VARIABLE]
            0x24 GlobalSet => visit_global_set "global.set" $crate::GetOrSetVariableImm [VARIABLE]
            0x28 I32Load => visit_i32_load "i32.load" $crate::LoadOrStoreImm [LOAD]
            0x29 I64Load => visit_i64_load "i64.load" $crate::LoadOrStoreImm [LOAD]
            0x2a F32Load => visit_f32_load "f32.load" $crate::LoadOrStoreImm [LOAD]
            0x2b F64Load => visit_f64_load "f64.load" $crate::LoadOrStoreImm [LOAD]
            0x2c I32Load8S => visit_i32_load8_s "i32.load8_s" $crate::LoadOrStoreImm [LOAD]
            0x2d I32Load8U => visit_i32_load8_u "i32.load8_u" $crate::LoadOrStoreImm [LOAD]
            0x2e I32Load16S => visit_i32_load16_s "i32.load16_s" $crate::LoadOrStoreImm [LOAD]
            0x2f I32Load16U => visit_i32_load16_u "i32.load16_u" $crate::LoadOrStoreImm [LOAD]
            0x30 I64Load8S => visit_i64_load8_s "i64.load8_s" $crate::LoadOrStoreImm [LOAD]
            0x31 I64Load8U => visit_i64_load8_u "i64.load8_u" $crate::LoadOrStoreImm [LOAD]
            0x32 I64Load16S => visit_i64_load16_s "i64.load16_s" $crate::LoadOrStoreImm [LOAD]
            0x33 I64Load16U => visit_i64_load16_u "i64.load16_u" $crate::LoadOrStoreImm [LOAD]
            0x34 I64Load32S => visit_i64_load32_s "i64.load32_s" $crate::LoadOrStoreImm [LOAD]
            0x35 I64Load32U => visit_i64_load32_u "i64.load32_u" $crate::LoadOrStoreImm [LOAD]
            0x36 I32Store => visit_i32_store "i32.store" $crate::LoadOrStoreImm [STORE]
            0x37 I64Store => visit_i64_store "i64.store" $crate::LoadOrStoreImm [STORE]
            0x38 F32Store => visit_f32_store "f32.store" $crate::LoadOrStoreImm [STORE]
            0x39 F64Store => visit_f64_store "f64.store" $crate::LoadOrStoreImm [STORE]
            0x3a I32Store8 => visit_i32_store8 "i32.store8" $crate::LoadOrStoreImm [STORE]
            0x3b I32Store16 => visit_i32_store16 "i32.store16" $crate::LoadOrStoreImm [STORE]
            0x3c I64Store8 => visit_i64_store8 "i64.store8" $crate::LoadOrStoreImm [STORE]
            0x3d I64Store16 => visit_i64_store16 "i64.store16" $crate::LoadOrStoreImm [STORE]
            0x3e I64Store32 => visit_i64_store32 "i64.store32" $crate::LoadOrStoreImm [STORE]
            0x3f MemorySize => visit_memory_size "memory.size" $crate::MemoryImm [MEMORY]
            0x40 MemoryGrow => visit_memory_grow "memory.grow" $crate::MemoryImm [MEMORY]
            0x41 I32Const => visit_i32_const "i32.const" $crate::LiteralImm<i32> [CONST]
            0x42 I64Const => visit_i64_const "i64.const" $crate::LiteralImm<i64> [CONST]
            0x43 F32Const => visit_f32_const "f32.const" $crate::LiteralImm<f32> [CONST]
            0x44 F64Const => visit_f64_const "f64.const" $crate::LiteralImm<f64> [CONST]
            0x45 I32Eqz => visit_i32_eqz "i32.eqz" $crate::NoImm []
            0x46 I32Eq => visit_i32_eq "i32.eq" $crate::NoImm []
            0x47 I32Ne => visit_i32_ne "i32.ne" $crate::NoImm []
            0x48 I32LtS => visit_i32_lt_s "i32.lt_s" $crate::NoImm []
            0x49 I32LtU => visit_i32_lt_u "i32.lt_u" $crate::NoImm []
            0x4a I32GtS => visit_i32_gt_s "i32.gt_s" $crate::NoImm []
            0x4b I32GtU => visit_i32_gt_u "i32.gt_u" $crate::NoImm []
            0x4c I32LeS => visit_i32_le_s "i32.le_s" $crate::NoImm []
            0x4d I32LeU => visit_i32_le_u "i32.le_u" $crate::NoImm []
            0x4e I32GeS => visit_i32_ge_s "i32.ge_s" $crate::NoImm []
            0x4f I32GeU => visit_i32_ge_u "i32.ge_u" $crate::NoImm []
            0x50 I64Eqz => visit_i64_eqz "i64.eqz" $crate::NoImm []
            0x51 I64Eq => visit_i64_eq "i64.eq" $crate::NoImm []
            0x52 I64Ne => visit_i64_ne "i64.ne" $crate::NoImm []
            0x53 I64LtS => visit_i64_lt_s "i64.lt_s" $crate::NoImm []
            0x54 I64LtU => visit_i64_lt_u "i64.lt_u" $crate::NoImm []
            0x55 I64GtS => visit_i64_gt_s "i64.gt_s" $crate::NoImm []
            0x56 I64GtU => visit_i64_gt_u "i64.gt_u" $crate::NoImm []
            0x57 I64LeS => visit_i64_le_s "i64.le_s" $crate::NoImm []
            0x58 I64LeU => visit_i64_le_u "i64.le_u" $crate::NoImm []
            0x59 I64GeS => visit_i64_ge_s "i64.ge_s" $crate::NoImm []
            0x5a I64GeU => visit_i64_ge_u "i64.ge_u" $crate::NoImm []
            0x5b F32Eq => visit_f32_eq "f32.eq" $crate::NoImm []
            0x5c F32Ne => visit_f32_ne "f32.ne" $crate::NoImm []
            0x5d F32Lt => visit_f32_lt "f32.lt" $crate::NoImm []
            0x5e F32Gt => visit_f32_gt "f32.gt" $crate::NoImm []
            0x5f F32Le => visit_f32_le "f32.le" $crate::NoImm []
            0x60 F32Ge => visit_f32_ge "f32.ge" $crate::NoImm []
            0x61 F64Eq => visit_f64_eq "f64.eq" $crate::NoImm []
            0x62 F64Ne => visit_f64_ne "f64.ne" $crate::NoImm []
            0x63 F64Lt => visit_f64_lt "f64.lt" $crate::NoImm []
            0x64 F64Gt => visit_f64_gt "f64.gt" $crate::NoImm []
            0x65 F64Le => visit_f64_le "f64.le" $crate::NoImm []
            0x66 F64Ge => visit_f64_ge "f64.ge" $crate::NoImm []
            0x67 I32Clz => visit_i32_clz "i32.clz" $crate::NoImm []
            0x68 I32Ctz => visit_i32_ctz "i32.ctz" $crate::NoImm []
            0x69 I32Popcnt => visit_i32_popcnt "i32.popcnt" $crate::NoImm []
            0x6a I32Add => visit_i32_add "i32.add" $crate::NoImm []
            0x6b I32Sub => visit_i32_sub "i32.sub" $crate::NoImm []
            0x6c I32Mul => visit_i32_mul "i32.mul" $crate::NoImm []
            0x6d I32DivS => visit_i32_div_s "i32.div_s" $crate::NoImm []
            0x6e I32DivU => visit_i32_div_u "i32.div_u" $crate::NoImm []
            0x6f I32RemS => visit_i32_rem_s "i32.rem_s" $crate::NoImm []
            0x70 I32RemU => visit_i32_rem_u "i32.rem_u" $crate::NoImm []
            0x71 I32And => visit_i32_and "i32.and" $crate::NoImm []
            0x72 I32Or => visit_i32_or "i32.or" $crate::NoImm []
            0x73 I32Xor => visit_i32_xor "i32.xor" $crate::NoImm []
            0x74 I32Shl => visit_i32_shl "i32.shl" $crate::NoImm []
            0x75 I32ShrS => visit_i32_shr_s "i32.shr_s" $crate::NoImm []
            0x76 I32ShrU => visit_i32_shr_u "i32.shr_u" $crate::NoImm []
            0x77 I32Rotl => visit_i32_rotl "i32.rotl" $crate::NoImm []
            0x78 I32Rotr => visit_i32_rotr "i32.rotr" $crate::NoImm []
            0x79 I64Clz => visit_i64_clz "i64.clz" $crate::NoImm []
            0x7a I64Ctz => visit_i64_ctz "i64.ctz" $crate::NoImm []
            0x7b I64Popcnt => visit_i64_popcnt "i64.popcnt" $crate::NoImm []
            0x7c I64Add => visit_i64_add "i64.add" $crate::NoImm []
            0x7d I64Sub => visit_i64_sub "i64.sub" $crate::NoImm []
            0x7e I64Mul => visit_i64_mul "i64.mul" $crate::NoImm []
            0x7f I64DivS => visit_i64_div_s "i64.div_s" $crate::NoImm []
            0x80 I64DivU => visit_i64_div_u "i64.div_u" $crate::NoImm []
            0x81 I64RemS => visit_i64_rem_s "i64.rem_s" $crate::NoImm []
            0x82 I64RemU => visit_i64_rem_u "i64.rem_u" $crate::NoImm []
            0x83 I64And => visit_i64_and "i64.and" $crate::NoImm []
            0x84 I64Or => visit_i64_or "i64.or" $crate::NoImm []
            0x85 I64Xor => visit_i64_xor "i64.xor" $crate::NoImm []
            0x86 I64Shl => visit_i64_shl "i64.shl" $crate::NoImm []
            0x87 I64ShrS => visit_i64_shr_s "i64.shr_s" $crate::NoImm []
            0x88 I64ShrU => visit_i64_shr_u "i64.shr_u" $crate::NoImm []
            0x89 I64Rotl => visit_i64_rotl "i64.rotl" $crate::NoImm []
            0x8a I64Rotr => visit_i64_rotr "i64.rotr" $crate::NoImm []
            0x8b F32Abs => visit_f32_abs "f32.abs" $crate::NoImm []
            0x8c F32Neg => visit_f32_neg "f32.neg" $crate::NoImm []
            0x8d F32Ceil => visit_f32_ceil "f32.ceil" $crate::NoImm []
            0x8e F32Floor => visit_f32_floor "f32.floor" $crate::NoImm []
            0x8f F32Trunc => visit_f32_trunc "f32.trunc" $crate::NoImm []
            0x90 F32Nearest => visit_f32_nearest "f32.nearest" $crate::NoImm []
            0x91 F32Sqrt => visit_f32_sqrt "f32.sqrt" $crate::NoImm []
            0x92 F32Add => visit_f32_add "f32.add" $crate::NoImm []
            0x93 F32Sub => visit_f32_sub "f32.sub" $crate::NoImm []
            0x94 F32Mul => visit_f32_mul "f32.mul" $crate::NoImm []
            0x95 F32Div => visit_f32_div "f32.div" $crate::NoImm []
            0x96 F32Min => visit_f32_min "f32.min" $crate::NoImm []
            0x97 F32Max => visit_f32_max "f32.max" $crate::NoImm []
            0x98 F32Copysign => visit_f32_copysign "f32.copysign" $crate::NoImm []
            0x99 F64Abs => visit_f64_abs "f64.abs" $crate::NoImm []
            0x9a F64Neg => visit_f64_neg "f64.neg" $crate::NoImm []
            0x9b F64Ceil => visit_f64_ceil "f64.ceil" $crate::NoImm []
            0x9c F64Floor => visit_f64_floor "f64.floor" $crate::NoImm []
            0x9d F64Trunc => visit_f64_trunc "f64.trunc" $crate::NoImm []
            0x9e F64Nearest => visit_f64_nearest "f64.nearest" $crate::NoImm []
            0x9f F64Sqrt => visit_f64_sqrt "f64.sqrt" $crate::NoImm []
            0xa0 F64Add => visit_f64_add "f64.add" $crate::NoImm []
            0xa1 F64Sub => visit_f64_sub "f64.sub" $crate::NoImm []
            0xa2 F64Mul => visit_f64_mul "f64.mul" $crate::NoImm []
            0xa3 F64Div => visit_f64_div "f64.div" $crate::NoImm []
            0xa4 F64Min => visit_f64_min "f64.min" $crate::NoImm []
            0xa5 F64Max => visit_f64_max "f64.max" $crate::NoImm []
            0xa6 F64Copysign => visit_f64_copysign "f64.copysign" $crate::NoImm []
            0xa7 I32WrapI64 => visit_i32_wrap_i64 "i32.wrap_i64" $crate::NoImm []
            0xa8 I32TruncF32S => visit_i32_trunc_f32_s "i32.trunc_f32_s" $crate::NoImm []
            0xa9 I32TruncF32U => visit_i32_trunc_f32_u "i32.trunc_f32_u" $crate::NoImm []
            0xaa I32TruncF64S => visit_i32_trunc_f64_s "i32.trunc_f64_s" $crate::NoImm []
            0xab I32TruncF64U => visit_i32_trunc_f64_u "i32.trunc_f64_u" $crate::NoImm []
            0xac I64ExtendI32S => visit_i64_extend_i32_s "i64.extend_i32_s" $crate::NoImm []
            0xad I64ExtendI32U => visit_i64_extend_i32_u "i64.extend_i32_u" $crate::NoImm []
            0xae I64TruncF32S => visit_i64_trunc_f32_s "i64.trunc_f32_s" $crate::NoImm []
            0xaf I64TruncF32U => visit_i64_trunc_f32_u "i64.trunc_f32_u" $crate::NoImm []
            0xb0 I64TruncF64S => visit_i64_trunc_f64_s "i64.trunc_f64_s" $crate::NoImm []
            0xb1 I64TruncF64U => visit_i64_trunc_f64_u "i64.trunc_f64_u" $crate::NoImm []
            0xb2 F32ConvertI32S => visit_f32_convert_i32_s "f32.convert_i32_s" $crate::NoImm []
            0xb3 F32ConvertI32U => visit_f32_convert_i32_u "f32.convert_i32_u" $crate::NoImm []
            0xb4 F32ConvertI64S => visit_f32_convert_i64_s "f32.convert_i64_s" $crate::NoImm []
            0xb5 F32ConvertI64U => visit_f32_convert_i64_u "f32.convert_i64_u" $crate::NoImm []
            0xb6 F32DemoteF64 => visit_f32_demote_f64 "f32.demote_f64" $crate::NoImm []
            0xb7 F64ConvertI32S => visit_f64_convert_i32_s "f64.convert_i32_s" $crate::NoImm []
            0xb8 F64ConvertI32U => visit_f64_convert_i32_u "f64.convert_i32_u" $crate::NoImm []
            0xb9 F64ConvertI64S => visit_f64_convert_i64_s "f64.convert_i64_s" $crate::NoImm []
            0xba F64ConvertI64U => visit_f64_convert_i64_u "f64.convert_i64_u" $crate::NoImm []
            0xbb F64PromoteF32 => visit_f64_promote_f32 "f64.promote_f32" $crate::NoImm []
            0xbc I32ReinterpretF32 => visit_i32_reinterpret_f32 "i32.reinterpret_f32" $crate::NoImm []
            0xbd I64ReinterpretF64 => visit_i64_reinterpret_f64 "i64.reinterpret_f64" $crate::NoImm []
            0xbe F32ReinterpretI32 => visit_f32_reinterpret_i32 "f32.reinterpret_i32" $crate::NoImm []
            0xbf F64ReinterpretI64 => visit_f64_reinterpret_i64 "f64.reinterpret_i64" $crate::NoImm []
            $($extra)*
        }
    };
}

/// Invokes `$mac` with the full operator table.
///
/// With the `simd` feature the table also carries the `0xfd`-prefixed vector
/// operators.
#[cfg(feature = "simd")]
#[macro_export]
macro_rules! for_each_operator {
    ($mac:ident) => {
        $crate::__for_each_mvp_operator! {
            $mac
                0xfd00 V128Load => visit_v128_load "v128.load" $crate::LoadOrStoreImm [LOAD | SIMD]
                0xfd01 V128Store => visit_v128_store "v128.store" $crate::LoadOrStoreImm [STORE | SIMD]
                0xfd02 I8x16Splat => visit_i8x16_splat "i8x16.splat" $crate::NoImm [SIMD]
                0xfd03 I8x16ExtractLaneS => visit_i8x16_extract_lane_s "i8x16.extract_lane_s" $crate::LaneIndexImm<16> [SIMD]
                0xfd04 I8x16ExtractLaneU => visit_i8x16_extract_lane_u "i8x16.extract_lane_u" $crate::LaneIndexImm<16> [SIMD]
                0xfd05 I8x16ReplaceLane => visit_i8x16_replace_lane "i8x16.replace_lane" $crate::LaneIndexImm<16> [SIMD]
                0xfd06 I16x8Splat => visit_i16x8_splat "i16x8.splat" $crate::NoImm [SIMD]
                0xfd07 I16x8ExtractLaneS => visit_i16x8_extract_lane_s "i16x8.extract_lane_s" $crate::LaneIndexImm<8> [SIMD]
                0xfd08 I16x8ExtractLaneU => visit_i16x8_extract_lane_u "i16x8.extract_lane_u" $crate::LaneIndexImm<8> [SIMD]
                0xfd09 I16x8ReplaceLane => visit_i16x8_replace_lane "i16x8.replace_lane" $crate::LaneIndexImm<8> [SIMD]
                0xfd0a I32x4Splat => visit_i32x4_splat "i32x4.splat" $crate::NoImm [SIMD]
                0xfd0b I32x4ExtractLane => visit_i32x4_extract_lane "i32x4.extract_lane" $crate::LaneIndexImm<4> [SIMD]
                0xfd0c I32x4ReplaceLane => visit_i32x4_replace_lane "i32x4.replace_lane" $crate::LaneIndexImm<4> [SIMD]
                0xfd0d I64x2Splat => visit_i64x2_splat "i64x2.splat" $crate::NoImm [SIMD]
                0xfd0e I64x2ExtractLane => visit_i64x2_extract_lane "i64x2.extract_lane" $crate::LaneIndexImm<2> [SIMD]
                0xfd0f I64x2ReplaceLane => visit_i64x2_replace_lane "i64x2.replace_lane" $crate::LaneIndexImm<2> [SIMD]
                0xfd10 F32x4Splat => visit_f32x4_splat "f32x4.splat" $crate::NoImm [SIMD]
                0xfd11 F32x4ExtractLane => visit_f32x4_extract_lane "f32x4.extract_lane" $crate::LaneIndexImm<4> [SIMD]
                0xfd12 F32x4ReplaceLane => visit_f32x4_replace_lane "f32x4.replace_lane" $crate::LaneIndexImm<4> [SIMD]
                0xfd13 F64x2Splat => visit_f64x2_splat "f64x2.splat" $crate::NoImm [SIMD]
                0xfd14 F64x2ExtractLane => visit_f64x2_extract_lane "f64x2.extract_lane" $crate::LaneIndexImm<2> [SIMD]
                0xfd15 F64x2ReplaceLane => visit_f64x2_replace_lane "f64x2.replace_lane" $crate::LaneIndexImm<2> [SIMD]
                0xfd16 I8x16Add => visit_i8x16_add "i8x16.add" $crate::NoImm [SIMD]
                0xfd17 I16x8Add => visit_i16x8_add "i16x8.add" $crate::NoImm [SIMD]
                0xfd18 I32x4Add => visit_i32x4_add "i32x4.add" $crate::NoImm [SIMD]
                0xfd19 I64x2Add => visit_i64x2_add "i64x2.add" $crate::NoImm [SIMD]
                0xfd1a F32x4Add => visit_f32x4_add "f32x4.add" $crate::NoImm [SIMD]
                0xfd1b F64x2Add => visit_f64x2_add "f64x2.add" $crate::NoImm [SIMD]
                0xfd1c V8x16Swizzle => visit_v8x16_swizzle "v8x16.swizzle" $crate::SwizzleImm<16> [SIMD]
                0xfd1d V8x16Shuffle => visit_v8x16_shuffle "v8x16.shuffle" $crate::ShuffleImm<16> [SIMD]
                0xfd1e V16x8Swizzle => visit_v16x8_swizzle "v16x8.swizzle" $crate::SwizzleImm<8> [SIMD]
                0xfd1f V16x8Shuffle => visit_v16x8_shuffle "v16x8.shuffle" $crate::ShuffleImm<8> [SIMD]
                0xfd20 V32x4Swizzle => visit_v32x4_swizzle "v32x4.swizzle" $crate::SwizzleImm<4> [SIMD]
                0xfd21 V32x4Shuffle => visit_v32x4_shuffle "v32x4.shuffle" $crate::ShuffleImm<4> [SIMD]
                0xfd22 V64x2Swizzle => visit_v64x2_swizzle "v64x2.swizzle" $crate::SwizzleImm<2> [SIMD]
                0xfd23 V64x2Shuffle => visit_v64x2_shuffle "v64x2.shuffle" $crate::ShuffleImm<2> [SIMD]
                0xfd24 V128And => visit_v128_and "v128.and" $crate::NoImm [SIMD]
                0xfd25 V128Or => visit_v128_or "v128.or" $crate::NoImm [SIMD]
                0xfd26 V128Xor => visit_v128_xor "v128.xor" $crate::NoImm [SIMD]
                0xfd27 V128Not => visit_v128_not "v128.not" $crate::NoImm [SIMD]
        }
    };
}

/// Invokes `$mac` with the full operator table.
///
/// With the `simd` feature the table also carries the `0xfd`-prefixed vector
/// operators.
#[cfg(not(feature = "simd"))]
#[macro_export]
macro_rules! for_each_operator {
    ($mac:ident) => {
        $crate::__for_each_mvp_operator! { $mac }
    };
}

/// Expands the given items only when this crate is built with `simd`.
///
/// Downstream crates use it instead of their own feature so that the
/// vector code they compile always matches the [`Immediate`](crate::Immediate)
/// variants that exist.
#[cfg(feature = "simd")]
#[macro_export]
macro_rules! cfg_simd {
    ($($item:item)*) => {
        $($item)*
    };
}

/// Expands the given items only when this crate is built with `simd`.
///
/// Downstream crates use it instead of their own feature so that the
/// vector code they compile always matches the [`Immediate`](crate::Immediate)
/// variants that exist.
#[cfg(not(feature = "simd"))]
#[macro_export]
macro_rules! cfg_simd {
    ($($item:item)*) => {};
}

/// `match` over an [`Immediate`](crate::Immediate) with an extra arm for
/// `Immediate::Simd`, kept only when this crate is built with `simd`.
///
/// ```
/// use oplog_isa::{Immediate, NoImm, ImmediateOperand};
///
/// let imm = NoImm.as_immediate();
/// let wide = oplog_isa::match_immediate!(imm, {
///     Immediate::None | Immediate::Memory => false,
///     _other => true,
/// } simd(_lanes) => true);
/// assert!(!wide);
/// ```
#[cfg(feature = "simd")]
#[macro_export]
macro_rules! match_immediate {
    ($imm:expr, { $($arm:tt)* } simd($simd:pat) => $body:expr $(,)?) => {
        match $imm {
            $crate::Immediate::Simd($simd) => $body,
            $($arm)*
        }
    };
}

/// `match` over an [`Immediate`](crate::Immediate) with an extra arm for
/// `Immediate::Simd`, kept only when this crate is built with `simd`.
///
/// ```
/// use oplog_isa::{Immediate, NoImm, ImmediateOperand};
///
/// let imm = NoImm.as_immediate();
/// let wide = oplog_isa::match_immediate!(imm, {
///     Immediate::None | Immediate::Memory => false,
///     _other => true,
/// } simd(_lanes) => true);
/// assert!(!wide);
/// ```
#[cfg(not(feature = "simd"))]
#[macro_export]
macro_rules! match_immediate {
    ($imm:expr, { $($arm:tt)* } simd($simd:pat) => $body:expr $(,)?) => {
        match $imm {
            $($arm)*
        }
    };
}
