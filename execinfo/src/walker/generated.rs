// @generated by `cargo xtask gen-walker --max-depth 128`. Do not edit.
//
// Ordinal k + 1 is defined from ordinal k's frame base only, so every walk is
// an unrolled chain with a fixed ceiling.

#![allow(clippy::pedantic)]

use super::FrameBase;
use crate::domain::Address;

/// Deepest ordinal the walker can reach.
pub const MAX_DEPTH: usize = 128;

/// Frame-base accessors; index `n - 1` serves ordinal `n`.
pub(super) static FRAME_BASES: [unsafe fn(FrameBase) -> FrameBase; MAX_DEPTH] = [
    frame_base_1,
    frame_base_2,
    frame_base_3,
    frame_base_4,
    frame_base_5,
    frame_base_6,
    frame_base_7,
    frame_base_8,
    frame_base_9,
    frame_base_10,
    frame_base_11,
    frame_base_12,
    frame_base_13,
    frame_base_14,
    frame_base_15,
    frame_base_16,
    frame_base_17,
    frame_base_18,
    frame_base_19,
    frame_base_20,
    frame_base_21,
    frame_base_22,
    frame_base_23,
    frame_base_24,
    frame_base_25,
    frame_base_26,
    frame_base_27,
    frame_base_28,
    frame_base_29,
    frame_base_30,
    frame_base_31,
    frame_base_32,
    frame_base_33,
    frame_base_34,
    frame_base_35,
    frame_base_36,
    frame_base_37,
    frame_base_38,
    frame_base_39,
    frame_base_40,
    frame_base_41,
    frame_base_42,
    frame_base_43,
    frame_base_44,
    frame_base_45,
    frame_base_46,
    frame_base_47,
    frame_base_48,
    frame_base_49,
    frame_base_50,
    frame_base_51,
    frame_base_52,
    frame_base_53,
    frame_base_54,
    frame_base_55,
    frame_base_56,
    frame_base_57,
    frame_base_58,
    frame_base_59,
    frame_base_60,
    frame_base_61,
    frame_base_62,
    frame_base_63,
    frame_base_64,
    frame_base_65,
    frame_base_66,
    frame_base_67,
    frame_base_68,
    frame_base_69,
    frame_base_70,
    frame_base_71,
    frame_base_72,
    frame_base_73,
    frame_base_74,
    frame_base_75,
    frame_base_76,
    frame_base_77,
    frame_base_78,
    frame_base_79,
    frame_base_80,
    frame_base_81,
    frame_base_82,
    frame_base_83,
    frame_base_84,
    frame_base_85,
    frame_base_86,
    frame_base_87,
    frame_base_88,
    frame_base_89,
    frame_base_90,
    frame_base_91,
    frame_base_92,
    frame_base_93,
    frame_base_94,
    frame_base_95,
    frame_base_96,
    frame_base_97,
    frame_base_98,
    frame_base_99,
    frame_base_100,
    frame_base_101,
    frame_base_102,
    frame_base_103,
    frame_base_104,
    frame_base_105,
    frame_base_106,
    frame_base_107,
    frame_base_108,
    frame_base_109,
    frame_base_110,
    frame_base_111,
    frame_base_112,
    frame_base_113,
    frame_base_114,
    frame_base_115,
    frame_base_116,
    frame_base_117,
    frame_base_118,
    frame_base_119,
    frame_base_120,
    frame_base_121,
    frame_base_122,
    frame_base_123,
    frame_base_124,
    frame_base_125,
    frame_base_126,
    frame_base_127,
    frame_base_128,
];

/// Resume-address accessors; index `n - 1` serves ordinal `n`.
pub(super) static RETURN_ADDRESSES: [unsafe fn(FrameBase) -> Address; MAX_DEPTH] = [
    return_address_1,
    return_address_2,
    return_address_3,
    return_address_4,
    return_address_5,
    return_address_6,
    return_address_7,
    return_address_8,
    return_address_9,
    return_address_10,
    return_address_11,
    return_address_12,
    return_address_13,
    return_address_14,
    return_address_15,
    return_address_16,
    return_address_17,
    return_address_18,
    return_address_19,
    return_address_20,
    return_address_21,
    return_address_22,
    return_address_23,
    return_address_24,
    return_address_25,
    return_address_26,
    return_address_27,
    return_address_28,
    return_address_29,
    return_address_30,
    return_address_31,
    return_address_32,
    return_address_33,
    return_address_34,
    return_address_35,
    return_address_36,
    return_address_37,
    return_address_38,
    return_address_39,
    return_address_40,
    return_address_41,
    return_address_42,
    return_address_43,
    return_address_44,
    return_address_45,
    return_address_46,
    return_address_47,
    return_address_48,
    return_address_49,
    return_address_50,
    return_address_51,
    return_address_52,
    return_address_53,
    return_address_54,
    return_address_55,
    return_address_56,
    return_address_57,
    return_address_58,
    return_address_59,
    return_address_60,
    return_address_61,
    return_address_62,
    return_address_63,
    return_address_64,
    return_address_65,
    return_address_66,
    return_address_67,
    return_address_68,
    return_address_69,
    return_address_70,
    return_address_71,
    return_address_72,
    return_address_73,
    return_address_74,
    return_address_75,
    return_address_76,
    return_address_77,
    return_address_78,
    return_address_79,
    return_address_80,
    return_address_81,
    return_address_82,
    return_address_83,
    return_address_84,
    return_address_85,
    return_address_86,
    return_address_87,
    return_address_88,
    return_address_89,
    return_address_90,
    return_address_91,
    return_address_92,
    return_address_93,
    return_address_94,
    return_address_95,
    return_address_96,
    return_address_97,
    return_address_98,
    return_address_99,
    return_address_100,
    return_address_101,
    return_address_102,
    return_address_103,
    return_address_104,
    return_address_105,
    return_address_106,
    return_address_107,
    return_address_108,
    return_address_109,
    return_address_110,
    return_address_111,
    return_address_112,
    return_address_113,
    return_address_114,
    return_address_115,
    return_address_116,
    return_address_117,
    return_address_118,
    return_address_119,
    return_address_120,
    return_address_121,
    return_address_122,
    return_address_123,
    return_address_124,
    return_address_125,
    return_address_126,
    return_address_127,
    return_address_128,
];

#[inline(always)]
unsafe fn frame_base_0(origin: FrameBase) -> FrameBase { origin }

unsafe fn frame_base_1(origin: FrameBase) -> FrameBase { frame_base_0(origin).link() }
unsafe fn return_address_1(origin: FrameBase) -> Address { frame_base_0(origin).resume_address() }

unsafe fn frame_base_2(origin: FrameBase) -> FrameBase { frame_base_1(origin).link() }
unsafe fn return_address_2(origin: FrameBase) -> Address { frame_base_1(origin).resume_address() }

unsafe fn frame_base_3(origin: FrameBase) -> FrameBase { frame_base_2(origin).link() }
unsafe fn return_address_3(origin: FrameBase) -> Address { frame_base_2(origin).resume_address() }

unsafe fn frame_base_4(origin: FrameBase) -> FrameBase { frame_base_3(origin).link() }
unsafe fn return_address_4(origin: FrameBase) -> Address { frame_base_3(origin).resume_address() }

unsafe fn frame_base_5(origin: FrameBase) -> FrameBase { frame_base_4(origin).link() }
unsafe fn return_address_5(origin: FrameBase) -> Address { frame_base_4(origin).resume_address() }

unsafe fn frame_base_6(origin: FrameBase) -> FrameBase { frame_base_5(origin).link() }
unsafe fn return_address_6(origin: FrameBase) -> Address { frame_base_5(origin).resume_address() }

unsafe fn frame_base_7(origin: FrameBase) -> FrameBase { frame_base_6(origin).link() }
unsafe fn return_address_7(origin: FrameBase) -> Address { frame_base_6(origin).resume_address() }

unsafe fn frame_base_8(origin: FrameBase) -> FrameBase { frame_base_7(origin).link() }
unsafe fn return_address_8(origin: FrameBase) -> Address { frame_base_7(origin).resume_address() }

unsafe fn frame_base_9(origin: FrameBase) -> FrameBase { frame_base_8(origin).link() }
unsafe fn return_address_9(origin: FrameBase) -> Address { frame_base_8(origin).resume_address() }

unsafe fn frame_base_10(origin: FrameBase) -> FrameBase { frame_base_9(origin).link() }
unsafe fn return_address_10(origin: FrameBase) -> Address { frame_base_9(origin).resume_address() }

unsafe fn frame_base_11(origin: FrameBase) -> FrameBase { frame_base_10(origin).link() }
unsafe fn return_address_11(origin: FrameBase) -> Address { frame_base_10(origin).resume_address() }

unsafe fn frame_base_12(origin: FrameBase) -> FrameBase { frame_base_11(origin).link() }
unsafe fn return_address_12(origin: FrameBase) -> Address { frame_base_11(origin).resume_address() }

unsafe fn frame_base_13(origin: FrameBase) -> FrameBase { frame_base_12(origin).link() }
unsafe fn return_address_13(origin: FrameBase) -> Address { frame_base_12(origin).resume_address() }

unsafe fn frame_base_14(origin: FrameBase) -> FrameBase { frame_base_13(origin).link() }
unsafe fn return_address_14(origin: FrameBase) -> Address { frame_base_13(origin).resume_address() }

unsafe fn frame_base_15(origin: FrameBase) -> FrameBase { frame_base_14(origin).link() }
unsafe fn return_address_15(origin: FrameBase) -> Address { frame_base_14(origin).resume_address() }

unsafe fn frame_base_16(origin: FrameBase) -> FrameBase { frame_base_15(origin).link() }
unsafe fn return_address_16(origin: FrameBase) -> Address { frame_base_15(origin).resume_address() }

unsafe fn frame_base_17(origin: FrameBase) -> FrameBase { frame_base_16(origin).link() }
unsafe fn return_address_17(origin: FrameBase) -> Address { frame_base_16(origin).resume_address() }

unsafe fn frame_base_18(origin: FrameBase) -> FrameBase { frame_base_17(origin).link() }
unsafe fn return_address_18(origin: FrameBase) -> Address { frame_base_17(origin).resume_address() }

unsafe fn frame_base_19(origin: FrameBase) -> FrameBase { frame_base_18(origin).link() }
unsafe fn return_address_19(origin: FrameBase) -> Address { frame_base_18(origin).resume_address() }

unsafe fn frame_base_20(origin: FrameBase) -> FrameBase { frame_base_19(origin).link() }
unsafe fn return_address_20(origin: FrameBase) -> Address { frame_base_19(origin).resume_address() }

unsafe fn frame_base_21(origin: FrameBase) -> FrameBase { frame_base_20(origin).link() }
unsafe fn return_address_21(origin: FrameBase) -> Address { frame_base_20(origin).resume_address() }

unsafe fn frame_base_22(origin: FrameBase) -> FrameBase { frame_base_21(origin).link() }
unsafe fn return_address_22(origin: FrameBase) -> Address { frame_base_21(origin).resume_address() }

unsafe fn frame_base_23(origin: FrameBase) -> FrameBase { frame_base_22(origin).link() }
unsafe fn return_address_23(origin: FrameBase) -> Address { frame_base_22(origin).resume_address() }

unsafe fn frame_base_24(origin: FrameBase) -> FrameBase { frame_base_23(origin).link() }
unsafe fn return_address_24(origin: FrameBase) -> Address { frame_base_23(origin).resume_address() }

unsafe fn frame_base_25(origin: FrameBase) -> FrameBase { frame_base_24(origin).link() }
unsafe fn return_address_25(origin: FrameBase) -> Address { frame_base_24(origin).resume_address() }

unsafe fn frame_base_26(origin: FrameBase) -> FrameBase { frame_base_25(origin).link() }
unsafe fn return_address_26(origin: FrameBase) -> Address { frame_base_25(origin).resume_address() }

unsafe fn frame_base_27(origin: FrameBase) -> FrameBase { frame_base_26(origin).link() }
unsafe fn return_address_27(origin: FrameBase) -> Address { frame_base_26(origin).resume_address() }

unsafe fn frame_base_28(origin: FrameBase) -> FrameBase { frame_base_27(origin).link() }
unsafe fn return_address_28(origin: FrameBase) -> Address { frame_base_27(origin).resume_address() }

unsafe fn frame_base_29(origin: FrameBase) -> FrameBase { frame_base_28(origin).link() }
unsafe fn return_address_29(origin: FrameBase) -> Address { frame_base_28(origin).resume_address() }

unsafe fn frame_base_30(origin: FrameBase) -> FrameBase { frame_base_29(origin).link() }
unsafe fn return_address_30(origin: FrameBase) -> Address { frame_base_29(origin).resume_address() }

unsafe fn frame_base_31(origin: FrameBase) -> FrameBase { frame_base_30(origin).link() }
unsafe fn return_address_31(origin: FrameBase) -> Address { frame_base_30(origin).resume_address() }

unsafe fn frame_base_32(origin: FrameBase) -> FrameBase { frame_base_31(origin).link() }
unsafe fn return_address_32(origin: FrameBase) -> Address { frame_base_31(origin).resume_address() }

unsafe fn frame_base_33(origin: FrameBase) -> FrameBase { frame_base_32(origin).link() }
unsafe fn return_address_33(origin: FrameBase) -> Address { frame_base_32(origin).resume_address() }

unsafe fn frame_base_34(origin: FrameBase) -> FrameBase { frame_base_33(origin).link() }
unsafe fn return_address_34(origin: FrameBase) -> Address { frame_base_33(origin).resume_address() }

unsafe fn frame_base_35(origin: FrameBase) -> FrameBase { frame_base_34(origin).link() }
unsafe fn return_address_35(origin: FrameBase) -> Address { frame_base_34(origin).resume_address() }

unsafe fn frame_base_36(origin: FrameBase) -> FrameBase { frame_base_35(origin).link() }
unsafe fn return_address_36(origin: FrameBase) -> Address { frame_base_35(origin).resume_address() }

unsafe fn frame_base_37(origin: FrameBase) -> FrameBase { frame_base_36(origin).link() }
unsafe fn return_address_37(origin: FrameBase) -> Address { frame_base_36(origin).resume_address() }

unsafe fn frame_base_38(origin: FrameBase) -> FrameBase { frame_base_37(origin).link() }
unsafe fn return_address_38(origin: FrameBase) -> Address { frame_base_37(origin).resume_address() }

unsafe fn frame_base_39(origin: FrameBase) -> FrameBase { frame_base_38(origin).link() }
unsafe fn return_address_39(origin: FrameBase) -> Address { frame_base_38(origin).resume_address() }

unsafe fn frame_base_40(origin: FrameBase) -> FrameBase { frame_base_39(origin).link() }
unsafe fn return_address_40(origin: FrameBase) -> Address { frame_base_39(origin).resume_address() }

unsafe fn frame_base_41(origin: FrameBase) -> FrameBase { frame_base_40(origin).link() }
unsafe fn return_address_41(origin: FrameBase) -> Address { frame_base_40(origin).resume_address() }

unsafe fn frame_base_42(origin: FrameBase) -> FrameBase { frame_base_41(origin).link() }
unsafe fn return_address_42(origin: FrameBase) -> Address { frame_base_41(origin).resume_address() }

unsafe fn frame_base_43(origin: FrameBase) -> FrameBase { frame_base_42(origin).link() }
unsafe fn return_address_43(origin: FrameBase) -> Address { frame_base_42(origin).resume_address() }

unsafe fn frame_base_44(origin: FrameBase) -> FrameBase { frame_base_43(origin).link() }
unsafe fn return_address_44(origin: FrameBase) -> Address { frame_base_43(origin).resume_address() }

unsafe fn frame_base_45(origin: FrameBase) -> FrameBase { frame_base_44(origin).link() }
unsafe fn return_address_45(origin: FrameBase) -> Address { frame_base_44(origin).resume_address() }

unsafe fn frame_base_46(origin: FrameBase) -> FrameBase { frame_base_45(origin).link() }
unsafe fn return_address_46(origin: FrameBase) -> Address { frame_base_45(origin).resume_address() }

unsafe fn frame_base_47(origin: FrameBase) -> FrameBase { frame_base_46(origin).link() }
unsafe fn return_address_47(origin: FrameBase) -> Address { frame_base_46(origin).resume_address() }

unsafe fn frame_base_48(origin: FrameBase) -> FrameBase { frame_base_47(origin).link() }
unsafe fn return_address_48(origin: FrameBase) -> Address { frame_base_47(origin).resume_address() }

unsafe fn frame_base_49(origin: FrameBase) -> FrameBase { frame_base_48(origin).link() }
unsafe fn return_address_49(origin: FrameBase) -> Address { frame_base_48(origin).resume_address() }

unsafe fn frame_base_50(origin: FrameBase) -> FrameBase { frame_base_49(origin).link() }
unsafe fn return_address_50(origin: FrameBase) -> Address { frame_base_49(origin).resume_address() }

unsafe fn frame_base_51(origin: FrameBase) -> FrameBase { frame_base_50(origin).link() }
unsafe fn return_address_51(origin: FrameBase) -> Address { frame_base_50(origin).resume_address() }

unsafe fn frame_base_52(origin: FrameBase) -> FrameBase { frame_base_51(origin).link() }
unsafe fn return_address_52(origin: FrameBase) -> Address { frame_base_51(origin).resume_address() }

unsafe fn frame_base_53(origin: FrameBase) -> FrameBase { frame_base_52(origin).link() }
unsafe fn return_address_53(origin: FrameBase) -> Address { frame_base_52(origin).resume_address() }

unsafe fn frame_base_54(origin: FrameBase) -> FrameBase { frame_base_53(origin).link() }
unsafe fn return_address_54(origin: FrameBase) -> Address { frame_base_53(origin).resume_address() }

unsafe fn frame_base_55(origin: FrameBase) -> FrameBase { frame_base_54(origin).link() }
unsafe fn return_address_55(origin: FrameBase) -> Address { frame_base_54(origin).resume_address() }

unsafe fn frame_base_56(origin: FrameBase) -> FrameBase { frame_base_55(origin).link() }
unsafe fn return_address_56(origin: FrameBase) -> Address { frame_base_55(origin).resume_address() }

unsafe fn frame_base_57(origin: FrameBase) -> FrameBase { frame_base_56(origin).link() }
unsafe fn return_address_57(origin: FrameBase) -> Address { frame_base_56(origin).resume_address() }

unsafe fn frame_base_58(origin: FrameBase) -> FrameBase { frame_base_57(origin).link() }
unsafe fn return_address_58(origin: FrameBase) -> Address { frame_base_57(origin).resume_address() }

unsafe fn frame_base_59(origin: FrameBase) -> FrameBase { frame_base_58(origin).link() }
unsafe fn return_address_59(origin: FrameBase) -> Address { frame_base_58(origin).resume_address() }

unsafe fn frame_base_60(origin: FrameBase) -> FrameBase { frame_base_59(origin).link() }
unsafe fn return_address_60(origin: FrameBase) -> Address { frame_base_59(origin).resume_address() }

unsafe fn frame_base_61(origin: FrameBase) -> FrameBase { frame_base_60(origin).link() }
unsafe fn return_address_61(origin: FrameBase) -> Address { frame_base_60(origin).resume_address() }

unsafe fn frame_base_62(origin: FrameBase) -> FrameBase { frame_base_61(origin).link() }
unsafe fn return_address_62(origin: FrameBase) -> Address { frame_base_61(origin).resume_address() }

unsafe fn frame_base_63(origin: FrameBase) -> FrameBase { frame_base_62(origin).link() }
unsafe fn return_address_63(origin: FrameBase) -> Address { frame_base_62(origin).resume_address() }

unsafe fn frame_base_64(origin: FrameBase) -> FrameBase { frame_base_63(origin).link() }
unsafe fn return_address_64(origin: FrameBase) -> Address { frame_base_63(origin).resume_address() }

unsafe fn frame_base_65(origin: FrameBase) -> FrameBase { frame_base_64(origin).link() }
unsafe fn return_address_65(origin: FrameBase) -> Address { frame_base_64(origin).resume_address() }

unsafe fn frame_base_66(origin: FrameBase) -> FrameBase { frame_base_65(origin).link() }
unsafe fn return_address_66(origin: FrameBase) -> Address { frame_base_65(origin).resume_address() }

unsafe fn frame_base_67(origin: FrameBase) -> FrameBase { frame_base_66(origin).link() }
unsafe fn return_address_67(origin: FrameBase) -> Address { frame_base_66(origin).resume_address() }

unsafe fn frame_base_68(origin: FrameBase) -> FrameBase { frame_base_67(origin).link() }
unsafe fn return_address_68(origin: FrameBase) -> Address { frame_base_67(origin).resume_address() }

unsafe fn frame_base_69(origin: FrameBase) -> FrameBase { frame_base_68(origin).link() }
unsafe fn return_address_69(origin: FrameBase) -> Address { frame_base_68(origin).resume_address() }

unsafe fn frame_base_70(origin: FrameBase) -> FrameBase { frame_base_69(origin).link() }
unsafe fn return_address_70(origin: FrameBase) -> Address { frame_base_69(origin).resume_address() }

unsafe fn frame_base_71(origin: FrameBase) -> FrameBase { frame_base_70(origin).link() }
unsafe fn return_address_71(origin: FrameBase) -> Address { frame_base_70(origin).resume_address() }

unsafe fn frame_base_72(origin: FrameBase) -> FrameBase { frame_base_71(origin).link() }
unsafe fn return_address_72(origin: FrameBase) -> Address { frame_base_71(origin).resume_address() }

unsafe fn frame_base_73(origin: FrameBase) -> FrameBase { frame_base_72(origin).link() }
unsafe fn return_address_73(origin: FrameBase) -> Address { frame_base_72(origin).resume_address() }

unsafe fn frame_base_74(origin: FrameBase) -> FrameBase { frame_base_73(origin).link() }
unsafe fn return_address_74(origin: FrameBase) -> Address { frame_base_73(origin).resume_address() }

unsafe fn frame_base_75(origin: FrameBase) -> FrameBase { frame_base_74(origin).link() }
unsafe fn return_address_75(origin: FrameBase) -> Address { frame_base_74(origin).resume_address() }

unsafe fn frame_base_76(origin: FrameBase) -> FrameBase { frame_base_75(origin).link() }
unsafe fn return_address_76(origin: FrameBase) -> Address { frame_base_75(origin).resume_address() }

unsafe fn frame_base_77(origin: FrameBase) -> FrameBase { frame_base_76(origin).link() }
unsafe fn return_address_77(origin: FrameBase) -> Address { frame_base_76(origin).resume_address() }

unsafe fn frame_base_78(origin: FrameBase) -> FrameBase { frame_base_77(origin).link() }
unsafe fn return_address_78(origin: FrameBase) -> Address { frame_base_77(origin).resume_address() }

unsafe fn frame_base_79(origin: FrameBase) -> FrameBase { frame_base_78(origin).link() }
unsafe fn return_address_79(origin: FrameBase) -> Address { frame_base_78(origin).resume_address() }

unsafe fn frame_base_80(origin: FrameBase) -> FrameBase { frame_base_79(origin).link() }
unsafe fn return_address_80(origin: FrameBase) -> Address { frame_base_79(origin).resume_address() }

unsafe fn frame_base_81(origin: FrameBase) -> FrameBase { frame_base_80(origin).link() }
unsafe fn return_address_81(origin: FrameBase) -> Address { frame_base_80(origin).resume_address() }

unsafe fn frame_base_82(origin: FrameBase) -> FrameBase { frame_base_81(origin).link() }
unsafe fn return_address_82(origin: FrameBase) -> Address { frame_base_81(origin).resume_address() }

unsafe fn frame_base_83(origin: FrameBase) -> FrameBase { frame_base_82(origin).link() }
unsafe fn return_address_83(origin: FrameBase) -> Address { frame_base_82(origin).resume_address() }

unsafe fn frame_base_84(origin: FrameBase) -> FrameBase { frame_base_83(origin).link() }
unsafe fn return_address_84(origin: FrameBase) -> Address { frame_base_83(origin).resume_address() }

unsafe fn frame_base_85(origin: FrameBase) -> FrameBase { frame_base_84(origin).link() }
unsafe fn return_address_85(origin: FrameBase) -> Address { frame_base_84(origin).resume_address() }

unsafe fn frame_base_86(origin: FrameBase) -> FrameBase { frame_base_85(origin).link() }
unsafe fn return_address_86(origin: FrameBase) -> Address { frame_base_85(origin).resume_address() }

unsafe fn frame_base_87(origin: FrameBase) -> FrameBase { frame_base_86(origin).link() }
unsafe fn return_address_87(origin: FrameBase) -> Address { frame_base_86(origin).resume_address() }

unsafe fn frame_base_88(origin: FrameBase) -> FrameBase { frame_base_87(origin).link() }
unsafe fn return_address_88(origin: FrameBase) -> Address { frame_base_87(origin).resume_address() }

unsafe fn frame_base_89(origin: FrameBase) -> FrameBase { frame_base_88(origin).link() }
unsafe fn return_address_89(origin: FrameBase) -> Address { frame_base_88(origin).resume_address() }

unsafe fn frame_base_90(origin: FrameBase) -> FrameBase { frame_base_89(origin).link() }
unsafe fn return_address_90(origin: FrameBase) -> Address { frame_base_89(origin).resume_address() }

unsafe fn frame_base_91(origin: FrameBase) -> FrameBase { frame_base_90(origin).link() }
unsafe fn return_address_91(origin: FrameBase) -> Address { frame_base_90(origin).resume_address() }

unsafe fn frame_base_92(origin: FrameBase) -> FrameBase { frame_base_91(origin).link() }
unsafe fn return_address_92(origin: FrameBase) -> Address { frame_base_91(origin).resume_address() }

unsafe fn frame_base_93(origin: FrameBase) -> FrameBase { frame_base_92(origin).link() }
unsafe fn return_address_93(origin: FrameBase) -> Address { frame_base_92(origin).resume_address() }

unsafe fn frame_base_94(origin: FrameBase) -> FrameBase { frame_base_93(origin).link() }
unsafe fn return_address_94(origin: FrameBase) -> Address { frame_base_93(origin).resume_address() }

unsafe fn frame_base_95(origin: FrameBase) -> FrameBase { frame_base_94(origin).link() }
unsafe fn return_address_95(origin: FrameBase) -> Address { frame_base_94(origin).resume_address() }

unsafe fn frame_base_96(origin: FrameBase) -> FrameBase { frame_base_95(origin).link() }
unsafe fn return_address_96(origin: FrameBase) -> Address { frame_base_95(origin).resume_address() }

unsafe fn frame_base_97(origin: FrameBase) -> FrameBase { frame_base_96(origin).link() }
unsafe fn return_address_97(origin: FrameBase) -> Address { frame_base_96(origin).resume_address() }

unsafe fn frame_base_98(origin: FrameBase) -> FrameBase { frame_base_97(origin).link() }
unsafe fn return_address_98(origin: FrameBase) -> Address { frame_base_97(origin).resume_address() }

unsafe fn frame_base_99(origin: FrameBase) -> FrameBase { frame_base_98(origin).link() }
unsafe fn return_address_99(origin: FrameBase) -> Address { frame_base_98(origin).resume_address() }

unsafe fn frame_base_100(origin: FrameBase) -> FrameBase { frame_base_99(origin).link() }
unsafe fn return_address_100(origin: FrameBase) -> Address { frame_base_99(origin).resume_address() }

unsafe fn frame_base_101(origin: FrameBase) -> FrameBase { frame_base_100(origin).link() }
unsafe fn return_address_101(origin: FrameBase) -> Address { frame_base_100(origin).resume_address() }

unsafe fn frame_base_102(origin: FrameBase) -> FrameBase { frame_base_101(origin).link() }
unsafe fn return_address_102(origin: FrameBase) -> Address { frame_base_101(origin).resume_address() }

unsafe fn frame_base_103(origin: FrameBase) -> FrameBase { frame_base_102(origin).link() }
unsafe fn return_address_103(origin: FrameBase) -> Address { frame_base_102(origin).resume_address() }

unsafe fn frame_base_104(origin: FrameBase) -> FrameBase { frame_base_103(origin).link() }
unsafe fn return_address_104(origin: FrameBase) -> Address { frame_base_103(origin).resume_address() }

unsafe fn frame_base_105(origin: FrameBase) -> FrameBase { frame_base_104(origin).link() }
unsafe fn return_address_105(origin: FrameBase) -> Address { frame_base_104(origin).resume_address() }

unsafe fn frame_base_106(origin: FrameBase) -> FrameBase { frame_base_105(origin).link() }
unsafe fn return_address_106(origin: FrameBase) -> Address { frame_base_105(origin).resume_address() }

unsafe fn frame_base_107(origin: FrameBase) -> FrameBase { frame_base_106(origin).link() }
unsafe fn return_address_107(origin: FrameBase) -> Address { frame_base_106(origin).resume_address() }

unsafe fn frame_base_108(origin: FrameBase) -> FrameBase { frame_base_107(origin).link() }
unsafe fn return_address_108(origin: FrameBase) -> Address { frame_base_107(origin).resume_address() }

unsafe fn frame_base_109(origin: FrameBase) -> FrameBase { frame_base_108(origin).link() }
unsafe fn return_address_109(origin: FrameBase) -> Address { frame_base_108(origin).resume_address() }

unsafe fn frame_base_110(origin: FrameBase) -> FrameBase { frame_base_109(origin).link() }
unsafe fn return_address_110(origin: FrameBase) -> Address { frame_base_109(origin).resume_address() }

unsafe fn frame_base_111(origin: FrameBase) -> FrameBase { frame_base_110(origin).link() }
unsafe fn return_address_111(origin: FrameBase) -> Address { frame_base_110(origin).resume_address() }

unsafe fn frame_base_112(origin: FrameBase) -> FrameBase { frame_base_111(origin).link() }
unsafe fn return_address_112(origin: FrameBase) -> Address { frame_base_111(origin).resume_address() }

unsafe fn frame_base_113(origin: FrameBase) -> FrameBase { frame_base_112(origin).link() }
unsafe fn return_address_113(origin: FrameBase) -> Address { frame_base_112(origin).resume_address() }

unsafe fn frame_base_114(origin: FrameBase) -> FrameBase { frame_base_113(origin).link() }
unsafe fn return_address_114(origin: FrameBase) -> Address { frame_base_113(origin).resume_address() }

unsafe fn frame_base_115(origin: FrameBase) -> FrameBase { frame_base_114(origin).link() }
unsafe fn return_address_115(origin: FrameBase) -> Address { frame_base_114(origin).resume_address() }

unsafe fn frame_base_116(origin: FrameBase) -> FrameBase { frame_base_115(origin).link() }
unsafe fn return_address_116(origin: FrameBase) -> Address { frame_base_115(origin).resume_address() }

unsafe fn frame_base_117(origin: FrameBase) -> FrameBase { frame_base_116(origin).link() }
unsafe fn return_address_117(origin: FrameBase) -> Address { frame_base_116(origin).resume_address() }

unsafe fn frame_base_118(origin: FrameBase) -> FrameBase { frame_base_117(origin).link() }
unsafe fn return_address_118(origin: FrameBase) -> Address { frame_base_117(origin).resume_address() }

unsafe fn frame_base_119(origin: FrameBase) -> FrameBase { frame_base_118(origin).link() }
unsafe fn return_address_119(origin: FrameBase) -> Address { frame_base_118(origin).resume_address() }

unsafe fn frame_base_120(origin: FrameBase) -> FrameBase { frame_base_119(origin).link() }
unsafe fn return_address_120(origin: FrameBase) -> Address { frame_base_119(origin).resume_address() }

unsafe fn frame_base_121(origin: FrameBase) -> FrameBase { frame_base_120(origin).link() }
unsafe fn return_address_121(origin: FrameBase) -> Address { frame_base_120(origin).resume_address() }

unsafe fn frame_base_122(origin: FrameBase) -> FrameBase { frame_base_121(origin).link() }
unsafe fn return_address_122(origin: FrameBase) -> Address { frame_base_121(origin).resume_address() }

unsafe fn frame_base_123(origin: FrameBase) -> FrameBase { frame_base_122(origin).link() }
unsafe fn return_address_123(origin: FrameBase) -> Address { frame_base_122(origin).resume_address() }

unsafe fn frame_base_124(origin: FrameBase) -> FrameBase { frame_base_123(origin).link() }
unsafe fn return_address_124(origin: FrameBase) -> Address { frame_base_123(origin).resume_address() }

unsafe fn frame_base_125(origin: FrameBase) -> FrameBase { frame_base_124(origin).link() }
unsafe fn return_address_125(origin: FrameBase) -> Address { frame_base_124(origin).resume_address() }

unsafe fn frame_base_126(origin: FrameBase) -> FrameBase { frame_base_125(origin).link() }
unsafe fn return_address_126(origin: FrameBase) -> Address { frame_base_125(origin).resume_address() }

unsafe fn frame_base_127(origin: FrameBase) -> FrameBase { frame_base_126(origin).link() }
unsafe fn return_address_127(origin: FrameBase) -> Address { frame_base_126(origin).resume_address() }

unsafe fn frame_base_128(origin: FrameBase) -> FrameBase { frame_base_127(origin).link() }
unsafe fn return_address_128(origin: FrameBase) -> Address { frame_base_127(origin).resume_address() }
