//! Pre-built IDNA2008 code point tables.
//!
//! Generated from the IANA IDNA parameters registry (RFC 5892 derived
//! property values) and the Unicode Character Database
//! (`Scripts.txt`, `DerivedJoiningType.txt`), Unicode 17.0.0.
//! Do not edit by hand; regenerate when moving to a newer Unicode version.
//!
//! Every table is a sorted list of inclusive, non-overlapping ranges.

use crate::classification::JoiningType::{self, C, D, L, R, T};

/// Unicode version the tables were derived from.
pub const UNICODE_VERSION: &str = "17.0.0";

/// Code points that are valid in any label position.
pub(crate) static PVALID: &[(u32, u32)] = &[
    (0x0002D, 0x0002D), (0x00030, 0x00039), (0x00061, 0x0007A), (0x000DF, 0x000F6),
    (0x000F8, 0x000FF), (0x00101, 0x00101), (0x00103, 0x00103), (0x00105, 0x00105),
    (0x00107, 0x00107), (0x00109, 0x00109), (0x0010B, 0x0010B), (0x0010D, 0x0010D),
    (0x0010F, 0x0010F), (0x00111, 0x00111), (0x00113, 0x00113), (0x00115, 0x00115),
    (0x00117, 0x00117), (0x00119, 0x00119), (0x0011B, 0x0011B), (0x0011D, 0x0011D),
    (0x0011F, 0x0011F), (0x00121, 0x00121), (0x00123, 0x00123), (0x00125, 0x00125),
    (0x00127, 0x00127), (0x00129, 0x00129), (0x0012B, 0x0012B), (0x0012D, 0x0012D),
    (0x0012F, 0x0012F), (0x00131, 0x00131), (0x00135, 0x00135), (0x00137, 0x00138),
    (0x0013A, 0x0013A), (0x0013C, 0x0013C), (0x0013E, 0x0013E), (0x00142, 0x00142),
    (0x00144, 0x00144), (0x00146, 0x00146), (0x00148, 0x00148), (0x0014B, 0x0014B),
    (0x0014D, 0x0014D), (0x0014F, 0x0014F), (0x00151, 0x00151), (0x00153, 0x00153),
    (0x00155, 0x00155), (0x00157, 0x00157), (0x00159, 0x00159), (0x0015B, 0x0015B),
    (0x0015D, 0x0015D), (0x0015F, 0x0015F), (0x00161, 0x00161), (0x00163, 0x00163),
    (0x00165, 0x00165), (0x00167, 0x00167), (0x00169, 0x00169), (0x0016B, 0x0016B),
    (0x0016D, 0x0016D), (0x0016F, 0x0016F), (0x00171, 0x00171), (0x00173, 0x00173),
    (0x00175, 0x00175), (0x00177, 0x00177), (0x0017A, 0x0017A), (0x0017C, 0x0017C),
    (0x0017E, 0x0017E), (0x00180, 0x00180), (0x00183, 0x00183), (0x00185, 0x00185),
    (0x00188, 0x00188), (0x0018C, 0x0018D), (0x00192, 0x00192), (0x00195, 0x00195),
    (0x00199, 0x0019B), (0x0019E, 0x0019E), (0x001A1, 0x001A1), (0x001A3, 0x001A3),
    (0x001A5, 0x001A5), (0x001A8, 0x001A8), (0x001AA, 0x001AB), (0x001AD, 0x001AD),
    (0x001B0, 0x001B0), (0x001B4, 0x001B4), (0x001B6, 0x001B6), (0x001B9, 0x001BB),
    (0x001BD, 0x001C3), (0x001CE, 0x001CE), (0x001D0, 0x001D0), (0x001D2, 0x001D2),
    (0x001D4, 0x001D4), (0x001D6, 0x001D6), (0x001D8, 0x001D8), (0x001DA, 0x001DA),
    (0x001DC, 0x001DD), (0x001DF, 0x001DF), (0x001E1, 0x001E1), (0x001E3, 0x001E3),
    (0x001E5, 0x001E5), (0x001E7, 0x001E7), (0x001E9, 0x001E9), (0x001EB, 0x001EB),
    (0x001ED, 0x001ED), (0x001EF, 0x001F0), (0x001F5, 0x001F5), (0x001F9, 0x001F9),
    (0x001FB, 0x001FB), (0x001FD, 0x001FD), (0x001FF, 0x001FF), (0x00201, 0x00201),
    (0x00203, 0x00203), (0x00205, 0x00205), (0x00207, 0x00207), (0x00209, 0x00209),
    (0x0020B, 0x0020B), (0x0020D, 0x0020D), (0x0020F, 0x0020F), (0x00211, 0x00211),
    (0x00213, 0x00213), (0x00215, 0x00215), (0x00217, 0x00217), (0x00219, 0x00219),
    (0x0021B, 0x0021B), (0x0021D, 0x0021D), (0x0021F, 0x0021F), (0x00221, 0x00221),
    (0x00223, 0x00223), (0x00225, 0x00225), (0x00227, 0x00227), (0x00229, 0x00229),
    (0x0022B, 0x0022B), (0x0022D, 0x0022D), (0x0022F, 0x0022F), (0x00231, 0x00231),
    (0x00233, 0x00239), (0x0023C, 0x0023C), (0x0023F, 0x00240), (0x00242, 0x00242),
    (0x00247, 0x00247), (0x00249, 0x00249), (0x0024B, 0x0024B), (0x0024D, 0x0024D),
    (0x0024F, 0x002AF), (0x002B9, 0x002C1), (0x002C6, 0x002D1), (0x002EC, 0x002EC),
    (0x002EE, 0x002EE), (0x00300, 0x0033F), (0x00342, 0x00342), (0x00346, 0x0034E),
    (0x00350, 0x0036F), (0x00371, 0x00371), (0x00373, 0x00373), (0x00377, 0x00377),
    (0x0037B, 0x0037D), (0x00390, 0x00390), (0x003AC, 0x003CE), (0x003D7, 0x003D7),
    (0x003D9, 0x003D9), (0x003DB, 0x003DB), (0x003DD, 0x003DD), (0x003DF, 0x003DF),
    (0x003E1, 0x003E1), (0x003E3, 0x003E3), (0x003E5, 0x003E5), (0x003E7, 0x003E7),
    (0x003E9, 0x003E9), (0x003EB, 0x003EB), (0x003ED, 0x003ED), (0x003EF, 0x003EF),
    (0x003F3, 0x003F3), (0x003F8, 0x003F8), (0x003FB, 0x003FC), (0x00430, 0x0045F),
    (0x00461, 0x00461), (0x00463, 0x00463), (0x00465, 0x00465), (0x00467, 0x00467),
    (0x00469, 0x00469), (0x0046B, 0x0046B), (0x0046D, 0x0046D), (0x0046F, 0x0046F),
    (0x00471, 0x00471), (0x00473, 0x00473), (0x00475, 0x00475), (0x00477, 0x00477),
    (0x00479, 0x00479), (0x0047B, 0x0047B), (0x0047D, 0x0047D), (0x0047F, 0x0047F),
    (0x00481, 0x00481), (0x00483, 0x00487), (0x0048B, 0x0048B), (0x0048D, 0x0048D),
    (0x0048F, 0x0048F), (0x00491, 0x00491), (0x00493, 0x00493), (0x00495, 0x00495),
    (0x00497, 0x00497), (0x00499, 0x00499), (0x0049B, 0x0049B), (0x0049D, 0x0049D),
    (0x0049F, 0x0049F), (0x004A1, 0x004A1), (0x004A3, 0x004A3), (0x004A5, 0x004A5),
    (0x004A7, 0x004A7), (0x004A9, 0x004A9), (0x004AB, 0x004AB), (0x004AD, 0x004AD),
    (0x004AF, 0x004AF), (0x004B1, 0x004B1), (0x004B3, 0x004B3), (0x004B5, 0x004B5),
    (0x004B7, 0x004B7), (0x004B9, 0x004B9), (0x004BB, 0x004BB), (0x004BD, 0x004BD),
    (0x004BF, 0x004BF), (0x004C2, 0x004C2), (0x004C4, 0x004C4), (0x004C6, 0x004C6),
    (0x004C8, 0x004C8), (0x004CA, 0x004CA), (0x004CC, 0x004CC), (0x004CE, 0x004CF),
    (0x004D1, 0x004D1), (0x004D3, 0x004D3), (0x004D5, 0x004D5), (0x004D7, 0x004D7),
    (0x004D9, 0x004D9), (0x004DB, 0x004DB), (0x004DD, 0x004DD), (0x004DF, 0x004DF),
    (0x004E1, 0x004E1), (0x004E3, 0x004E3), (0x004E5, 0x004E5), (0x004E7, 0x004E7),
    (0x004E9, 0x004E9), (0x004EB, 0x004EB), (0x004ED, 0x004ED), (0x004EF, 0x004EF),
    (0x004F1, 0x004F1), (0x004F3, 0x004F3), (0x004F5, 0x004F5), (0x004F7, 0x004F7),
    (0x004F9, 0x004F9), (0x004FB, 0x004FB), (0x004FD, 0x004FD), (0x004FF, 0x004FF),
    (0x00501, 0x00501), (0x00503, 0x00503), (0x00505, 0x00505), (0x00507, 0x00507),
    (0x00509, 0x00509), (0x0050B, 0x0050B), (0x0050D, 0x0050D), (0x0050F, 0x0050F),
    (0x00511, 0x00511), (0x00513, 0x00513), (0x00515, 0x00515), (0x00517, 0x00517),
    (0x00519, 0x00519), (0x0051B, 0x0051B), (0x0051D, 0x0051D), (0x0051F, 0x0051F),
    (0x00521, 0x00521), (0x00523, 0x00523), (0x00525, 0x00525), (0x00527, 0x00527),
    (0x00529, 0x00529), (0x0052B, 0x0052B), (0x0052D, 0x0052D), (0x0052F, 0x0052F),
    (0x00559, 0x00559), (0x00560, 0x00586), (0x00588, 0x00588), (0x00591, 0x005BD),
    (0x005BF, 0x005BF), (0x005C1, 0x005C2), (0x005C4, 0x005C5), (0x005C7, 0x005C7),
    (0x005D0, 0x005EA), (0x005EF, 0x005F2), (0x00610, 0x0061A), (0x00620, 0x0063F),
    (0x00641, 0x0065F), (0x0066E, 0x00674), (0x00679, 0x006D3), (0x006D5, 0x006DC),
    (0x006DF, 0x006E8), (0x006EA, 0x006EF), (0x006FA, 0x006FF), (0x00710, 0x0074A),
    (0x0074D, 0x007B1), (0x007C0, 0x007F5), (0x007FD, 0x007FD), (0x00800, 0x0082D),
    (0x00840, 0x0085B), (0x00860, 0x0086A), (0x00870, 0x00887), (0x00889, 0x0088F),
    (0x00897, 0x008E1), (0x008E3, 0x00957), (0x00960, 0x00963), (0x00966, 0x0096F),
    (0x00971, 0x00983), (0x00985, 0x0098C), (0x0098F, 0x00990), (0x00993, 0x009A8),
    (0x009AA, 0x009B0), (0x009B2, 0x009B2), (0x009B6, 0x009B9), (0x009BC, 0x009C4),
    (0x009C7, 0x009C8), (0x009CB, 0x009CE), (0x009D7, 0x009D7), (0x009E0, 0x009E3),
    (0x009E6, 0x009F1), (0x009FC, 0x009FC), (0x009FE, 0x009FE), (0x00A01, 0x00A03),
    (0x00A05, 0x00A0A), (0x00A0F, 0x00A10), (0x00A13, 0x00A28), (0x00A2A, 0x00A30),
    (0x00A32, 0x00A32), (0x00A35, 0x00A35), (0x00A38, 0x00A39), (0x00A3C, 0x00A3C),
    (0x00A3E, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A5C, 0x00A5C), (0x00A66, 0x00A75), (0x00A81, 0x00A83), (0x00A85, 0x00A8D),
    (0x00A8F, 0x00A91), (0x00A93, 0x00AA8), (0x00AAA, 0x00AB0), (0x00AB2, 0x00AB3),
    (0x00AB5, 0x00AB9), (0x00ABC, 0x00AC5), (0x00AC7, 0x00AC9), (0x00ACB, 0x00ACD),
    (0x00AD0, 0x00AD0), (0x00AE0, 0x00AE3), (0x00AE6, 0x00AEF), (0x00AF9, 0x00AFF),
    (0x00B01, 0x00B03), (0x00B05, 0x00B0C), (0x00B0F, 0x00B10), (0x00B13, 0x00B28),
    (0x00B2A, 0x00B30), (0x00B32, 0x00B33), (0x00B35, 0x00B39), (0x00B3C, 0x00B44),
    (0x00B47, 0x00B48), (0x00B4B, 0x00B4D), (0x00B55, 0x00B57), (0x00B5F, 0x00B63),
    (0x00B66, 0x00B6F), (0x00B71, 0x00B71), (0x00B82, 0x00B83), (0x00B85, 0x00B8A),
    (0x00B8E, 0x00B90), (0x00B92, 0x00B95), (0x00B99, 0x00B9A), (0x00B9C, 0x00B9C),
    (0x00B9E, 0x00B9F), (0x00BA3, 0x00BA4), (0x00BA8, 0x00BAA), (0x00BAE, 0x00BB9),
    (0x00BBE, 0x00BC2), (0x00BC6, 0x00BC8), (0x00BCA, 0x00BCD), (0x00BD0, 0x00BD0),
    (0x00BD7, 0x00BD7), (0x00BE6, 0x00BEF), (0x00C00, 0x00C0C), (0x00C0E, 0x00C10),
    (0x00C12, 0x00C28), (0x00C2A, 0x00C39), (0x00C3C, 0x00C44), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C58, 0x00C5A), (0x00C5C, 0x00C5D),
    (0x00C60, 0x00C63), (0x00C66, 0x00C6F), (0x00C80, 0x00C83), (0x00C85, 0x00C8C),
    (0x00C8E, 0x00C90), (0x00C92, 0x00CA8), (0x00CAA, 0x00CB3), (0x00CB5, 0x00CB9),
    (0x00CBC, 0x00CC4), (0x00CC6, 0x00CC8), (0x00CCA, 0x00CCD), (0x00CD5, 0x00CD6),
    (0x00CDC, 0x00CDE), (0x00CE0, 0x00CE3), (0x00CE6, 0x00CEF), (0x00CF1, 0x00CF3),
    (0x00D00, 0x00D0C), (0x00D0E, 0x00D10), (0x00D12, 0x00D44), (0x00D46, 0x00D48),
    (0x00D4A, 0x00D4E), (0x00D54, 0x00D57), (0x00D5F, 0x00D63), (0x00D66, 0x00D6F),
    (0x00D7A, 0x00D7F), (0x00D81, 0x00D83), (0x00D85, 0x00D96), (0x00D9A, 0x00DB1),
    (0x00DB3, 0x00DBB), (0x00DBD, 0x00DBD), (0x00DC0, 0x00DC6), (0x00DCA, 0x00DCA),
    (0x00DCF, 0x00DD4), (0x00DD6, 0x00DD6), (0x00DD8, 0x00DDF), (0x00DE6, 0x00DEF),
    (0x00DF2, 0x00DF3), (0x00E01, 0x00E32), (0x00E34, 0x00E3A), (0x00E40, 0x00E4E),
    (0x00E50, 0x00E59), (0x00E81, 0x00E82), (0x00E84, 0x00E84), (0x00E86, 0x00E8A),
    (0x00E8C, 0x00EA3), (0x00EA5, 0x00EA5), (0x00EA7, 0x00EB2), (0x00EB4, 0x00EBD),
    (0x00EC0, 0x00EC4), (0x00EC6, 0x00EC6), (0x00EC8, 0x00ECE), (0x00ED0, 0x00ED9),
    (0x00EDE, 0x00EDF), (0x00F00, 0x00F00), (0x00F0B, 0x00F0B), (0x00F18, 0x00F19),
    (0x00F20, 0x00F29), (0x00F35, 0x00F35), (0x00F37, 0x00F37), (0x00F39, 0x00F39),
    (0x00F3E, 0x00F42), (0x00F44, 0x00F47), (0x00F49, 0x00F4C), (0x00F4E, 0x00F51),
    (0x00F53, 0x00F56), (0x00F58, 0x00F5B), (0x00F5D, 0x00F68), (0x00F6A, 0x00F6C),
    (0x00F71, 0x00F72), (0x00F74, 0x00F74), (0x00F7A, 0x00F80), (0x00F82, 0x00F84),
    (0x00F86, 0x00F92), (0x00F94, 0x00F97), (0x00F99, 0x00F9C), (0x00F9E, 0x00FA1),
    (0x00FA3, 0x00FA6), (0x00FA8, 0x00FAB), (0x00FAD, 0x00FB8), (0x00FBA, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x01000, 0x01049), (0x01050, 0x0109D), (0x010D0, 0x010FA),
    (0x010FD, 0x010FF), (0x01200, 0x01248), (0x0124A, 0x0124D), (0x01250, 0x01256),
    (0x01258, 0x01258), (0x0125A, 0x0125D), (0x01260, 0x01288), (0x0128A, 0x0128D),
    (0x01290, 0x012B0), (0x012B2, 0x012B5), (0x012B8, 0x012BE), (0x012C0, 0x012C0),
    (0x012C2, 0x012C5), (0x012C8, 0x012D6), (0x012D8, 0x01310), (0x01312, 0x01315),
    (0x01318, 0x0135A), (0x0135D, 0x0135F), (0x01380, 0x0138F), (0x013A0, 0x013F5),
    (0x01401, 0x0166C), (0x0166F, 0x0167F), (0x01681, 0x0169A), (0x016A0, 0x016EA),
    (0x016F1, 0x016F8), (0x01700, 0x01715), (0x0171F, 0x01734), (0x01740, 0x01753),
    (0x01760, 0x0176C), (0x0176E, 0x01770), (0x01772, 0x01773), (0x01780, 0x017B3),
    (0x017B6, 0x017D3), (0x017D7, 0x017D7), (0x017DC, 0x017DD), (0x017E0, 0x017E9),
    (0x01810, 0x01819), (0x01820, 0x01878), (0x01880, 0x018AA), (0x018B0, 0x018F5),
    (0x01900, 0x0191E), (0x01920, 0x0192B), (0x01930, 0x0193B), (0x01946, 0x0196D),
    (0x01970, 0x01974), (0x01980, 0x019AB), (0x019B0, 0x019C9), (0x019D0, 0x019D9),
    (0x01A00, 0x01A1B), (0x01A20, 0x01A5E), (0x01A60, 0x01A7C), (0x01A7F, 0x01A89),
    (0x01A90, 0x01A99), (0x01AA7, 0x01AA7), (0x01AB0, 0x01ABD), (0x01ABF, 0x01ADD),
    (0x01AE0, 0x01AEB), (0x01B00, 0x01B4C), (0x01B50, 0x01B59), (0x01B6B, 0x01B73),
    (0x01B80, 0x01BF3), (0x01C00, 0x01C37), (0x01C40, 0x01C49), (0x01C4D, 0x01C7D),
    (0x01C8A, 0x01C8A), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CFA), (0x01D00, 0x01D2B),
    (0x01D2F, 0x01D2F), (0x01D3B, 0x01D3B), (0x01D4E, 0x01D4E), (0x01D6B, 0x01D77),
    (0x01D79, 0x01D9A), (0x01DC0, 0x01DFF), (0x01E01, 0x01E01), (0x01E03, 0x01E03),
    (0x01E05, 0x01E05), (0x01E07, 0x01E07), (0x01E09, 0x01E09), (0x01E0B, 0x01E0B),
    (0x01E0D, 0x01E0D), (0x01E0F, 0x01E0F), (0x01E11, 0x01E11), (0x01E13, 0x01E13),
    (0x01E15, 0x01E15), (0x01E17, 0x01E17), (0x01E19, 0x01E19), (0x01E1B, 0x01E1B),
    (0x01E1D, 0x01E1D), (0x01E1F, 0x01E1F), (0x01E21, 0x01E21), (0x01E23, 0x01E23),
    (0x01E25, 0x01E25), (0x01E27, 0x01E27), (0x01E29, 0x01E29), (0x01E2B, 0x01E2B),
    (0x01E2D, 0x01E2D), (0x01E2F, 0x01E2F), (0x01E31, 0x01E31), (0x01E33, 0x01E33),
    (0x01E35, 0x01E35), (0x01E37, 0x01E37), (0x01E39, 0x01E39), (0x01E3B, 0x01E3B),
    (0x01E3D, 0x01E3D), (0x01E3F, 0x01E3F), (0x01E41, 0x01E41), (0x01E43, 0x01E43),
    (0x01E45, 0x01E45), (0x01E47, 0x01E47), (0x01E49, 0x01E49), (0x01E4B, 0x01E4B),
    (0x01E4D, 0x01E4D), (0x01E4F, 0x01E4F), (0x01E51, 0x01E51), (0x01E53, 0x01E53),
    (0x01E55, 0x01E55), (0x01E57, 0x01E57), (0x01E59, 0x01E59), (0x01E5B, 0x01E5B),
    (0x01E5D, 0x01E5D), (0x01E5F, 0x01E5F), (0x01E61, 0x01E61), (0x01E63, 0x01E63),
    (0x01E65, 0x01E65), (0x01E67, 0x01E67), (0x01E69, 0x01E69), (0x01E6B, 0x01E6B),
    (0x01E6D, 0x01E6D), (0x01E6F, 0x01E6F), (0x01E71, 0x01E71), (0x01E73, 0x01E73),
    (0x01E75, 0x01E75), (0x01E77, 0x01E77), (0x01E79, 0x01E79), (0x01E7B, 0x01E7B),
    (0x01E7D, 0x01E7D), (0x01E7F, 0x01E7F), (0x01E81, 0x01E81), (0x01E83, 0x01E83),
    (0x01E85, 0x01E85), (0x01E87, 0x01E87), (0x01E89, 0x01E89), (0x01E8B, 0x01E8B),
    (0x01E8D, 0x01E8D), (0x01E8F, 0x01E8F), (0x01E91, 0x01E91), (0x01E93, 0x01E93),
    (0x01E95, 0x01E99), (0x01E9C, 0x01E9D), (0x01E9F, 0x01E9F), (0x01EA1, 0x01EA1),
    (0x01EA3, 0x01EA3), (0x01EA5, 0x01EA5), (0x01EA7, 0x01EA7), (0x01EA9, 0x01EA9),
    (0x01EAB, 0x01EAB), (0x01EAD, 0x01EAD), (0x01EAF, 0x01EAF), (0x01EB1, 0x01EB1),
    (0x01EB3, 0x01EB3), (0x01EB5, 0x01EB5), (0x01EB7, 0x01EB7), (0x01EB9, 0x01EB9),
    (0x01EBB, 0x01EBB), (0x01EBD, 0x01EBD), (0x01EBF, 0x01EBF), (0x01EC1, 0x01EC1),
    (0x01EC3, 0x01EC3), (0x01EC5, 0x01EC5), (0x01EC7, 0x01EC7), (0x01EC9, 0x01EC9),
    (0x01ECB, 0x01ECB), (0x01ECD, 0x01ECD), (0x01ECF, 0x01ECF), (0x01ED1, 0x01ED1),
    (0x01ED3, 0x01ED3), (0x01ED5, 0x01ED5), (0x01ED7, 0x01ED7), (0x01ED9, 0x01ED9),
    (0x01EDB, 0x01EDB), (0x01EDD, 0x01EDD), (0x01EDF, 0x01EDF), (0x01EE1, 0x01EE1),
    (0x01EE3, 0x01EE3), (0x01EE5, 0x01EE5), (0x01EE7, 0x01EE7), (0x01EE9, 0x01EE9),
    (0x01EEB, 0x01EEB), (0x01EED, 0x01EED), (0x01EEF, 0x01EEF), (0x01EF1, 0x01EF1),
    (0x01EF3, 0x01EF3), (0x01EF5, 0x01EF5), (0x01EF7, 0x01EF7), (0x01EF9, 0x01EF9),
    (0x01EFB, 0x01EFB), (0x01EFD, 0x01EFD), (0x01EFF, 0x01F07), (0x01F10, 0x01F15),
    (0x01F20, 0x01F27), (0x01F30, 0x01F37), (0x01F40, 0x01F45), (0x01F50, 0x01F57),
    (0x01F60, 0x01F67), (0x01F70, 0x01F70), (0x01F72, 0x01F72), (0x01F74, 0x01F74),
    (0x01F76, 0x01F76), (0x01F78, 0x01F78), (0x01F7A, 0x01F7A), (0x01F7C, 0x01F7C),
    (0x01FB0, 0x01FB1), (0x01FB6, 0x01FB6), (0x01FC6, 0x01FC6), (0x01FD0, 0x01FD2),
    (0x01FD6, 0x01FD7), (0x01FE0, 0x01FE2), (0x01FE4, 0x01FE7), (0x01FF6, 0x01FF6),
    (0x0214E, 0x0214E), (0x02184, 0x02184), (0x02C30, 0x02C5F), (0x02C61, 0x02C61),
    (0x02C65, 0x02C66), (0x02C68, 0x02C68), (0x02C6A, 0x02C6A), (0x02C6C, 0x02C6C),
    (0x02C71, 0x02C71), (0x02C73, 0x02C74), (0x02C76, 0x02C7B), (0x02C81, 0x02C81),
    (0x02C83, 0x02C83), (0x02C85, 0x02C85), (0x02C87, 0x02C87), (0x02C89, 0x02C89),
    (0x02C8B, 0x02C8B), (0x02C8D, 0x02C8D), (0x02C8F, 0x02C8F), (0x02C91, 0x02C91),
    (0x02C93, 0x02C93), (0x02C95, 0x02C95), (0x02C97, 0x02C97), (0x02C99, 0x02C99),
    (0x02C9B, 0x02C9B), (0x02C9D, 0x02C9D), (0x02C9F, 0x02C9F), (0x02CA1, 0x02CA1),
    (0x02CA3, 0x02CA3), (0x02CA5, 0x02CA5), (0x02CA7, 0x02CA7), (0x02CA9, 0x02CA9),
    (0x02CAB, 0x02CAB), (0x02CAD, 0x02CAD), (0x02CAF, 0x02CAF), (0x02CB1, 0x02CB1),
    (0x02CB3, 0x02CB3), (0x02CB5, 0x02CB5), (0x02CB7, 0x02CB7), (0x02CB9, 0x02CB9),
    (0x02CBB, 0x02CBB), (0x02CBD, 0x02CBD), (0x02CBF, 0x02CBF), (0x02CC1, 0x02CC1),
    (0x02CC3, 0x02CC3), (0x02CC5, 0x02CC5), (0x02CC7, 0x02CC7), (0x02CC9, 0x02CC9),
    (0x02CCB, 0x02CCB), (0x02CCD, 0x02CCD), (0x02CCF, 0x02CCF), (0x02CD1, 0x02CD1),
    (0x02CD3, 0x02CD3), (0x02CD5, 0x02CD5), (0x02CD7, 0x02CD7), (0x02CD9, 0x02CD9),
    (0x02CDB, 0x02CDB), (0x02CDD, 0x02CDD), (0x02CDF, 0x02CDF), (0x02CE1, 0x02CE1),
    (0x02CE3, 0x02CE4), (0x02CEC, 0x02CEC), (0x02CEE, 0x02CF1), (0x02CF3, 0x02CF3),
    (0x02D00, 0x02D25), (0x02D27, 0x02D27), (0x02D2D, 0x02D2D), (0x02D30, 0x02D67),
    (0x02D7F, 0x02D96), (0x02DA0, 0x02DA6), (0x02DA8, 0x02DAE), (0x02DB0, 0x02DB6),
    (0x02DB8, 0x02DBE), (0x02DC0, 0x02DC6), (0x02DC8, 0x02DCE), (0x02DD0, 0x02DD6),
    (0x02DD8, 0x02DDE), (0x02DE0, 0x02DFF), (0x02E2F, 0x02E2F), (0x03005, 0x03007),
    (0x0302A, 0x0302D), (0x0303C, 0x0303C), (0x03041, 0x03096), (0x03099, 0x0309A),
    (0x0309D, 0x0309E), (0x030A1, 0x030FA), (0x030FC, 0x030FE), (0x03105, 0x0312F),
    (0x031A0, 0x031BF), (0x031F0, 0x031FF), (0x03400, 0x04DBF), (0x04E00, 0x0A48C),
    (0x0A4D0, 0x0A4FD), (0x0A500, 0x0A60C), (0x0A610, 0x0A62B), (0x0A641, 0x0A641),
    (0x0A643, 0x0A643), (0x0A645, 0x0A645), (0x0A647, 0x0A647), (0x0A649, 0x0A649),
    (0x0A64B, 0x0A64B), (0x0A64D, 0x0A64D), (0x0A64F, 0x0A64F), (0x0A651, 0x0A651),
    (0x0A653, 0x0A653), (0x0A655, 0x0A655), (0x0A657, 0x0A657), (0x0A659, 0x0A659),
    (0x0A65B, 0x0A65B), (0x0A65D, 0x0A65D), (0x0A65F, 0x0A65F), (0x0A661, 0x0A661),
    (0x0A663, 0x0A663), (0x0A665, 0x0A665), (0x0A667, 0x0A667), (0x0A669, 0x0A669),
    (0x0A66B, 0x0A66B), (0x0A66D, 0x0A66F), (0x0A674, 0x0A67D), (0x0A67F, 0x0A67F),
    (0x0A681, 0x0A681), (0x0A683, 0x0A683), (0x0A685, 0x0A685), (0x0A687, 0x0A687),
    (0x0A689, 0x0A689), (0x0A68B, 0x0A68B), (0x0A68D, 0x0A68D), (0x0A68F, 0x0A68F),
    (0x0A691, 0x0A691), (0x0A693, 0x0A693), (0x0A695, 0x0A695), (0x0A697, 0x0A697),
    (0x0A699, 0x0A699), (0x0A69B, 0x0A69B), (0x0A69E, 0x0A6E5), (0x0A6F0, 0x0A6F1),
    (0x0A717, 0x0A71F), (0x0A723, 0x0A723), (0x0A725, 0x0A725), (0x0A727, 0x0A727),
    (0x0A729, 0x0A729), (0x0A72B, 0x0A72B), (0x0A72D, 0x0A72D), (0x0A72F, 0x0A731),
    (0x0A733, 0x0A733), (0x0A735, 0x0A735), (0x0A737, 0x0A737), (0x0A739, 0x0A739),
    (0x0A73B, 0x0A73B), (0x0A73D, 0x0A73D), (0x0A73F, 0x0A73F), (0x0A741, 0x0A741),
    (0x0A743, 0x0A743), (0x0A745, 0x0A745), (0x0A747, 0x0A747), (0x0A749, 0x0A749),
    (0x0A74B, 0x0A74B), (0x0A74D, 0x0A74D), (0x0A74F, 0x0A74F), (0x0A751, 0x0A751),
    (0x0A753, 0x0A753), (0x0A755, 0x0A755), (0x0A757, 0x0A757), (0x0A759, 0x0A759),
    (0x0A75B, 0x0A75B), (0x0A75D, 0x0A75D), (0x0A75F, 0x0A75F), (0x0A761, 0x0A761),
    (0x0A763, 0x0A763), (0x0A765, 0x0A765), (0x0A767, 0x0A767), (0x0A769, 0x0A769),
    (0x0A76B, 0x0A76B), (0x0A76D, 0x0A76D), (0x0A76F, 0x0A76F), (0x0A771, 0x0A778),
    (0x0A77A, 0x0A77A), (0x0A77C, 0x0A77C), (0x0A77F, 0x0A77F), (0x0A781, 0x0A781),
    (0x0A783, 0x0A783), (0x0A785, 0x0A785), (0x0A787, 0x0A788), (0x0A78C, 0x0A78C),
    (0x0A78E, 0x0A78F), (0x0A791, 0x0A791), (0x0A793, 0x0A795), (0x0A797, 0x0A797),
    (0x0A799, 0x0A799), (0x0A79B, 0x0A79B), (0x0A79D, 0x0A79D), (0x0A79F, 0x0A79F),
    (0x0A7A1, 0x0A7A1), (0x0A7A3, 0x0A7A3), (0x0A7A5, 0x0A7A5), (0x0A7A7, 0x0A7A7),
    (0x0A7A9, 0x0A7A9), (0x0A7AF, 0x0A7AF), (0x0A7B5, 0x0A7B5), (0x0A7B7, 0x0A7B7),
    (0x0A7B9, 0x0A7B9), (0x0A7BB, 0x0A7BB), (0x0A7BD, 0x0A7BD), (0x0A7BF, 0x0A7BF),
    (0x0A7C1, 0x0A7C1), (0x0A7C3, 0x0A7C3), (0x0A7C8, 0x0A7C8), (0x0A7CA, 0x0A7CA),
    (0x0A7CD, 0x0A7CD), (0x0A7CF, 0x0A7CF), (0x0A7D1, 0x0A7D1), (0x0A7D3, 0x0A7D3),
    (0x0A7D5, 0x0A7D5), (0x0A7D7, 0x0A7D7), (0x0A7D9, 0x0A7D9), (0x0A7DB, 0x0A7DB),
    (0x0A7F6, 0x0A7F7), (0x0A7FA, 0x0A827), (0x0A82C, 0x0A82C), (0x0A840, 0x0A873),
    (0x0A880, 0x0A8C5), (0x0A8D0, 0x0A8D9), (0x0A8E0, 0x0A8F7), (0x0A8FB, 0x0A8FB),
    (0x0A8FD, 0x0A92D), (0x0A930, 0x0A953), (0x0A980, 0x0A9C0), (0x0A9CF, 0x0A9D9),
    (0x0A9E0, 0x0A9FE), (0x0AA00, 0x0AA36), (0x0AA40, 0x0AA4D), (0x0AA50, 0x0AA59),
    (0x0AA60, 0x0AA76), (0x0AA7A, 0x0AAC2), (0x0AADB, 0x0AADD), (0x0AAE0, 0x0AAEF),
    (0x0AAF2, 0x0AAF6), (0x0AB01, 0x0AB06), (0x0AB09, 0x0AB0E), (0x0AB11, 0x0AB16),
    (0x0AB20, 0x0AB26), (0x0AB28, 0x0AB2E), (0x0AB30, 0x0AB5A), (0x0AB60, 0x0AB68),
    (0x0ABC0, 0x0ABEA), (0x0ABEC, 0x0ABED), (0x0ABF0, 0x0ABF9), (0x0AC00, 0x0D7A3),
    (0x0FA0E, 0x0FA0F), (0x0FA11, 0x0FA11), (0x0FA13, 0x0FA14), (0x0FA1F, 0x0FA1F),
    (0x0FA21, 0x0FA21), (0x0FA23, 0x0FA24), (0x0FA27, 0x0FA29), (0x0FB1E, 0x0FB1E),
    (0x0FE20, 0x0FE2F), (0x0FE73, 0x0FE73), (0x10000, 0x1000B), (0x1000D, 0x10026),
    (0x10028, 0x1003A), (0x1003C, 0x1003D), (0x1003F, 0x1004D), (0x10050, 0x1005D),
    (0x10080, 0x100FA), (0x101FD, 0x101FD), (0x10280, 0x1029C), (0x102A0, 0x102D0),
    (0x102E0, 0x102E0), (0x10300, 0x1031F), (0x1032D, 0x10340), (0x10342, 0x10349),
    (0x10350, 0x1037A), (0x10380, 0x1039D), (0x103A0, 0x103C3), (0x103C8, 0x103CF),
    (0x10428, 0x1049D), (0x104A0, 0x104A9), (0x104D8, 0x104FB), (0x10500, 0x10527),
    (0x10530, 0x10563), (0x10597, 0x105A1), (0x105A3, 0x105B1), (0x105B3, 0x105B9),
    (0x105BB, 0x105BC), (0x105C0, 0x105F3), (0x10600, 0x10736), (0x10740, 0x10755),
    (0x10760, 0x10767), (0x10780, 0x10780), (0x10800, 0x10805), (0x10808, 0x10808),
    (0x1080A, 0x10835), (0x10837, 0x10838), (0x1083C, 0x1083C), (0x1083F, 0x10855),
    (0x10860, 0x10876), (0x10880, 0x1089E), (0x108E0, 0x108F2), (0x108F4, 0x108F5),
    (0x10900, 0x10915), (0x10920, 0x10939), (0x10940, 0x10959), (0x10980, 0x109B7),
    (0x109BE, 0x109BF), (0x10A00, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A13),
    (0x10A15, 0x10A17), (0x10A19, 0x10A35), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x10A60, 0x10A7C), (0x10A80, 0x10A9C), (0x10AC0, 0x10AC7), (0x10AC9, 0x10AE6),
    (0x10B00, 0x10B35), (0x10B40, 0x10B55), (0x10B60, 0x10B72), (0x10B80, 0x10B91),
    (0x10C00, 0x10C48), (0x10CC0, 0x10CF2), (0x10D00, 0x10D27), (0x10D30, 0x10D39),
    (0x10D40, 0x10D4F), (0x10D69, 0x10D6D), (0x10D6F, 0x10D85), (0x10E80, 0x10EA9),
    (0x10EAB, 0x10EAC), (0x10EB0, 0x10EB1), (0x10EC2, 0x10EC7), (0x10EFA, 0x10F1C),
    (0x10F27, 0x10F27), (0x10F30, 0x10F50), (0x10F70, 0x10F85), (0x10FB0, 0x10FC4),
    (0x10FE0, 0x10FF6), (0x11000, 0x11046), (0x11066, 0x11075), (0x1107F, 0x110BA),
    (0x110C2, 0x110C2), (0x110D0, 0x110E8), (0x110F0, 0x110F9), (0x11100, 0x11134),
    (0x11136, 0x1113F), (0x11144, 0x11147), (0x11150, 0x11173), (0x11176, 0x11176),
    (0x11180, 0x111C4), (0x111C9, 0x111CC), (0x111CE, 0x111DA), (0x111DC, 0x111DC),
    (0x11200, 0x11211), (0x11213, 0x11237), (0x1123E, 0x11241), (0x11280, 0x11286),
    (0x11288, 0x11288), (0x1128A, 0x1128D), (0x1128F, 0x1129D), (0x1129F, 0x112A8),
    (0x112B0, 0x112EA), (0x112F0, 0x112F9), (0x11300, 0x11303), (0x11305, 0x1130C),
    (0x1130F, 0x11310), (0x11313, 0x11328), (0x1132A, 0x11330), (0x11332, 0x11333),
    (0x11335, 0x11339), (0x1133B, 0x11344), (0x11347, 0x11348), (0x1134B, 0x1134D),
    (0x11350, 0x11350), (0x11357, 0x11357), (0x1135D, 0x11363), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x11380, 0x11389), (0x1138B, 0x1138B), (0x1138E, 0x1138E),
    (0x11390, 0x113B5), (0x113B7, 0x113C0), (0x113C2, 0x113C2), (0x113C5, 0x113C5),
    (0x113C7, 0x113CA), (0x113CC, 0x113D3), (0x113E1, 0x113E2), (0x11400, 0x1144A),
    (0x11450, 0x11459), (0x1145E, 0x11461), (0x11480, 0x114C5), (0x114C7, 0x114C7),
    (0x114D0, 0x114D9), (0x11580, 0x115B5), (0x115B8, 0x115C0), (0x115D8, 0x115DD),
    (0x11600, 0x11640), (0x11644, 0x11644), (0x11650, 0x11659), (0x11680, 0x116B8),
    (0x116C0, 0x116C9), (0x116D0, 0x116E3), (0x11700, 0x1171A), (0x1171D, 0x1172B),
    (0x11730, 0x11739), (0x11740, 0x11746), (0x11800, 0x1183A), (0x118C0, 0x118E9),
    (0x118FF, 0x11906), (0x11909, 0x11909), (0x1190C, 0x11913), (0x11915, 0x11916),
    (0x11918, 0x11935), (0x11937, 0x11938), (0x1193B, 0x11943), (0x11950, 0x11959),
    (0x119A0, 0x119A7), (0x119AA, 0x119D7), (0x119DA, 0x119E1), (0x119E3, 0x119E4),
    (0x11A00, 0x11A3E), (0x11A47, 0x11A47), (0x11A50, 0x11A99), (0x11A9D, 0x11A9D),
    (0x11AB0, 0x11AF8), (0x11B60, 0x11B67), (0x11BC0, 0x11BE0), (0x11BF0, 0x11BF9),
    (0x11C00, 0x11C08), (0x11C0A, 0x11C36), (0x11C38, 0x11C40), (0x11C50, 0x11C59),
    (0x11C72, 0x11C8F), (0x11C92, 0x11CA7), (0x11CA9, 0x11CB6), (0x11D00, 0x11D06),
    (0x11D08, 0x11D09), (0x11D0B, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D47), (0x11D50, 0x11D59), (0x11D60, 0x11D65), (0x11D67, 0x11D68),
    (0x11D6A, 0x11D8E), (0x11D90, 0x11D91), (0x11D93, 0x11D98), (0x11DA0, 0x11DA9),
    (0x11DB0, 0x11DDB), (0x11DE0, 0x11DE9), (0x11EE0, 0x11EF6), (0x11F00, 0x11F10),
    (0x11F12, 0x11F3A), (0x11F3E, 0x11F42), (0x11F50, 0x11F5A), (0x11FB0, 0x11FB0),
    (0x12000, 0x12399), (0x12480, 0x12543), (0x12F90, 0x12FF0), (0x13000, 0x1342F),
    (0x13440, 0x13455), (0x13460, 0x143FA), (0x14400, 0x14646), (0x16100, 0x16139),
    (0x16800, 0x16A38), (0x16A40, 0x16A5E), (0x16A60, 0x16A69), (0x16A70, 0x16ABE),
    (0x16AC0, 0x16AC9), (0x16AD0, 0x16AED), (0x16AF0, 0x16AF4), (0x16B00, 0x16B36),
    (0x16B40, 0x16B43), (0x16B50, 0x16B59), (0x16B63, 0x16B77), (0x16B7D, 0x16B8F),
    (0x16D40, 0x16D6C), (0x16D70, 0x16D79), (0x16E60, 0x16E7F), (0x16EBB, 0x16ED3),
    (0x16F00, 0x16F4A), (0x16F4F, 0x16F87), (0x16F8F, 0x16F9F), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE4), (0x16FF0, 0x16FF3), (0x17000, 0x18CD5), (0x18CFF, 0x18D1E),
    (0x18D80, 0x18DF2), (0x1AFF0, 0x1AFF3), (0x1AFF5, 0x1AFFB), (0x1AFFD, 0x1AFFE),
    (0x1B000, 0x1B122), (0x1B132, 0x1B132), (0x1B150, 0x1B152), (0x1B155, 0x1B155),
    (0x1B164, 0x1B167), (0x1B170, 0x1B2FB), (0x1BC00, 0x1BC6A), (0x1BC70, 0x1BC7C),
    (0x1BC80, 0x1BC88), (0x1BC90, 0x1BC99), (0x1BC9D, 0x1BC9E), (0x1CF00, 0x1CF2D),
    (0x1CF30, 0x1CF46), (0x1DA00, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75),
    (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1DF00, 0x1DF1E),
    (0x1DF25, 0x1DF2A), (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024), (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E100, 0x1E12C),
    (0x1E130, 0x1E13D), (0x1E140, 0x1E149), (0x1E14E, 0x1E14E), (0x1E290, 0x1E2AE),
    (0x1E2C0, 0x1E2F9), (0x1E4D0, 0x1E4F9), (0x1E5D0, 0x1E5FA), (0x1E6C0, 0x1E6DE),
    (0x1E6E0, 0x1E6F5), (0x1E6FE, 0x1E6FF), (0x1E7E0, 0x1E7E6), (0x1E7E8, 0x1E7EB),
    (0x1E7ED, 0x1E7EE), (0x1E7F0, 0x1E7FE), (0x1E800, 0x1E8C4), (0x1E8D0, 0x1E8D6),
    (0x1E922, 0x1E94B), (0x1E950, 0x1E959), (0x20000, 0x2A6DF), (0x2A700, 0x2B81D),
    (0x2B820, 0x2CEAD), (0x2CEB0, 0x2EBE0), (0x2EBF0, 0x2EE5D), (0x30000, 0x3134A),
    (0x31350, 0x33479),
];

/// Join controls, valid only under the RFC 5892 Appendix A.1/A.2 rules.
pub(crate) static CONTEXTJ: &[(u32, u32)] = &[
    (0x0200C, 0x0200D),
];

/// Code points valid only under the RFC 5892 Appendix A.3-A.9 rules.
pub(crate) static CONTEXTO: &[(u32, u32)] = &[
    (0x000B7, 0x000B7), (0x00375, 0x00375), (0x005F3, 0x005F4), (0x00660, 0x00669),
    (0x006F0, 0x006F9), (0x030FB, 0x030FB),
];

/// `Script=Greek`.
pub(crate) static SCRIPT_GREEK: &[(u32, u32)] = &[
    (0x00370, 0x00373), (0x00375, 0x00377), (0x0037A, 0x0037D), (0x0037F, 0x0037F),
    (0x00384, 0x00384), (0x00386, 0x00386), (0x00388, 0x0038A), (0x0038C, 0x0038C),
    (0x0038E, 0x003A1), (0x003A3, 0x003E1), (0x003F0, 0x003FF), (0x01D26, 0x01D2A),
    (0x01D5D, 0x01D61), (0x01D66, 0x01D6A), (0x01DBF, 0x01DBF), (0x01F00, 0x01F15),
    (0x01F18, 0x01F1D), (0x01F20, 0x01F45), (0x01F48, 0x01F4D), (0x01F50, 0x01F57),
    (0x01F59, 0x01F59), (0x01F5B, 0x01F5B), (0x01F5D, 0x01F5D), (0x01F5F, 0x01F7D),
    (0x01F80, 0x01FB4), (0x01FB6, 0x01FC4), (0x01FC6, 0x01FD3), (0x01FD6, 0x01FDB),
    (0x01FDD, 0x01FEF), (0x01FF2, 0x01FF4), (0x01FF6, 0x01FFE), (0x02126, 0x02126),
    (0x0AB65, 0x0AB65), (0x10140, 0x1018E), (0x101A0, 0x101A0), (0x1D200, 0x1D245),
];

/// `Script=Han`.
pub(crate) static SCRIPT_HAN: &[(u32, u32)] = &[
    (0x02E80, 0x02E99), (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x03005, 0x03005),
    (0x03007, 0x03007), (0x03021, 0x03029), (0x03038, 0x0303B), (0x03400, 0x04DBF),
    (0x04E00, 0x09FFF), (0x0F900, 0x0FA6D), (0x0FA70, 0x0FAD9), (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF6), (0x20000, 0x2A6DF), (0x2A700, 0x2B81D), (0x2B820, 0x2CEAD),
    (0x2CEB0, 0x2EBE0), (0x2EBF0, 0x2EE5D), (0x2F800, 0x2FA1D), (0x30000, 0x3134A),
    (0x31350, 0x33479),
];

/// `Script=Hebrew`.
pub(crate) static SCRIPT_HEBREW: &[(u32, u32)] = &[
    (0x00591, 0x005C7), (0x005D0, 0x005EA), (0x005EF, 0x005F4), (0x0FB1D, 0x0FB36),
    (0x0FB38, 0x0FB3C), (0x0FB3E, 0x0FB3E), (0x0FB40, 0x0FB41), (0x0FB43, 0x0FB44),
    (0x0FB46, 0x0FB4F),
];

/// `Script=Hiragana`.
pub(crate) static SCRIPT_HIRAGANA: &[(u32, u32)] = &[
    (0x03041, 0x03096), (0x0309D, 0x0309F), (0x1B001, 0x1B11F), (0x1B132, 0x1B132),
    (0x1B150, 0x1B152), (0x1F200, 0x1F200),
];

/// `Script=Katakana`.
pub(crate) static SCRIPT_KATAKANA: &[(u32, u32)] = &[
    (0x030A1, 0x030FA), (0x030FD, 0x030FF), (0x031F0, 0x031FF), (0x032D0, 0x032FE),
    (0x03300, 0x03357), (0x0FF66, 0x0FF6F), (0x0FF71, 0x0FF9D), (0x1AFF0, 0x1AFF3),
    (0x1AFF5, 0x1AFFB), (0x1AFFD, 0x1AFFE), (0x1B000, 0x1B000), (0x1B120, 0x1B122),
    (0x1B155, 0x1B155), (0x1B164, 0x1B167),
];

/// Joining type of every code point whose type is not `U` (non-joining).
pub(crate) static JOINING_TYPES: &[(u32, u32, JoiningType)] = &[
    (0x000AD, 0x000AD, T), (0x00300, 0x0036F, T), (0x00483, 0x00489, T),
    (0x00591, 0x005BD, T), (0x005BF, 0x005BF, T), (0x005C1, 0x005C2, T),
    (0x005C4, 0x005C5, T), (0x005C7, 0x005C7, T), (0x00610, 0x0061A, T),
    (0x0061C, 0x0061C, T), (0x00620, 0x00620, D), (0x00622, 0x00625, R),
    (0x00626, 0x00626, D), (0x00627, 0x00627, R), (0x00628, 0x00628, D),
    (0x00629, 0x00629, R), (0x0062A, 0x0062E, D), (0x0062F, 0x00632, R),
    (0x00633, 0x0063F, D), (0x00640, 0x00640, C), (0x00641, 0x00647, D),
    (0x00648, 0x00648, R), (0x00649, 0x0064A, D), (0x0064B, 0x0065F, T),
    (0x0066E, 0x0066F, D), (0x00670, 0x00670, T), (0x00671, 0x00673, R),
    (0x00675, 0x00677, R), (0x00678, 0x00687, D), (0x00688, 0x00699, R),
    (0x0069A, 0x006BF, D), (0x006C0, 0x006C0, R), (0x006C1, 0x006C2, D),
    (0x006C3, 0x006CB, R), (0x006CC, 0x006CC, D), (0x006CD, 0x006CD, R),
    (0x006CE, 0x006CE, D), (0x006CF, 0x006CF, R), (0x006D0, 0x006D1, D),
    (0x006D2, 0x006D3, R), (0x006D5, 0x006D5, R), (0x006D6, 0x006DC, T),
    (0x006DF, 0x006E4, T), (0x006E7, 0x006E8, T), (0x006EA, 0x006ED, T),
    (0x006EE, 0x006EF, R), (0x006FA, 0x006FC, D), (0x006FF, 0x006FF, D),
    (0x0070F, 0x0070F, T), (0x00710, 0x00710, R), (0x00711, 0x00711, T),
    (0x00712, 0x00714, D), (0x00715, 0x00719, R), (0x0071A, 0x0071D, D),
    (0x0071E, 0x0071E, R), (0x0071F, 0x00727, D), (0x00728, 0x00728, R),
    (0x00729, 0x00729, D), (0x0072A, 0x0072A, R), (0x0072B, 0x0072B, D),
    (0x0072C, 0x0072C, R), (0x0072D, 0x0072E, D), (0x0072F, 0x0072F, R),
    (0x00730, 0x0074A, T), (0x0074D, 0x0074D, R), (0x0074E, 0x00758, D),
    (0x00759, 0x0075B, R), (0x0075C, 0x0076A, D), (0x0076B, 0x0076C, R),
    (0x0076D, 0x00770, D), (0x00771, 0x00771, R), (0x00772, 0x00772, D),
    (0x00773, 0x00774, R), (0x00775, 0x00777, D), (0x00778, 0x00779, R),
    (0x0077A, 0x0077F, D), (0x007A6, 0x007B0, T), (0x007CA, 0x007EA, D),
    (0x007EB, 0x007F3, T), (0x007FA, 0x007FA, C), (0x007FD, 0x007FD, T),
    (0x00816, 0x00819, T), (0x0081B, 0x00823, T), (0x00825, 0x00827, T),
    (0x00829, 0x0082D, T), (0x00840, 0x00840, R), (0x00841, 0x00845, D),
    (0x00846, 0x00847, R), (0x00848, 0x00848, D), (0x00849, 0x00849, R),
    (0x0084A, 0x00853, D), (0x00854, 0x00854, R), (0x00855, 0x00855, D),
    (0x00856, 0x00858, R), (0x00859, 0x0085B, T), (0x00860, 0x00860, D),
    (0x00862, 0x00865, D), (0x00867, 0x00867, R), (0x00868, 0x00868, D),
    (0x00869, 0x0086A, R), (0x00870, 0x00882, R), (0x00883, 0x00885, C),
    (0x00886, 0x00886, D), (0x00889, 0x0088D, D), (0x0088E, 0x0088E, R),
    (0x0088F, 0x0088F, D), (0x00897, 0x0089F, T), (0x008A0, 0x008A9, D),
    (0x008AA, 0x008AC, R), (0x008AE, 0x008AE, R), (0x008AF, 0x008B0, D),
    (0x008B1, 0x008B2, R), (0x008B3, 0x008B8, D), (0x008B9, 0x008B9, R),
    (0x008BA, 0x008C8, D), (0x008CA, 0x008E1, T), (0x008E3, 0x00902, T),
    (0x0093A, 0x0093A, T), (0x0093C, 0x0093C, T), (0x00941, 0x00948, T),
    (0x0094D, 0x0094D, T), (0x00951, 0x00957, T), (0x00962, 0x00963, T),
    (0x00981, 0x00981, T), (0x009BC, 0x009BC, T), (0x009C1, 0x009C4, T),
    (0x009CD, 0x009CD, T), (0x009E2, 0x009E3, T), (0x009FE, 0x009FE, T),
    (0x00A01, 0x00A02, T), (0x00A3C, 0x00A3C, T), (0x00A41, 0x00A42, T),
    (0x00A47, 0x00A48, T), (0x00A4B, 0x00A4D, T), (0x00A51, 0x00A51, T),
    (0x00A70, 0x00A71, T), (0x00A75, 0x00A75, T), (0x00A81, 0x00A82, T),
    (0x00ABC, 0x00ABC, T), (0x00AC1, 0x00AC5, T), (0x00AC7, 0x00AC8, T),
    (0x00ACD, 0x00ACD, T), (0x00AE2, 0x00AE3, T), (0x00AFA, 0x00AFF, T),
    (0x00B01, 0x00B01, T), (0x00B3C, 0x00B3C, T), (0x00B3F, 0x00B3F, T),
    (0x00B41, 0x00B44, T), (0x00B4D, 0x00B4D, T), (0x00B55, 0x00B56, T),
    (0x00B62, 0x00B63, T), (0x00B82, 0x00B82, T), (0x00BC0, 0x00BC0, T),
    (0x00BCD, 0x00BCD, T), (0x00C00, 0x00C00, T), (0x00C04, 0x00C04, T),
    (0x00C3C, 0x00C3C, T), (0x00C3E, 0x00C40, T), (0x00C46, 0x00C48, T),
    (0x00C4A, 0x00C4D, T), (0x00C55, 0x00C56, T), (0x00C62, 0x00C63, T),
    (0x00C81, 0x00C81, T), (0x00CBC, 0x00CBC, T), (0x00CBF, 0x00CBF, T),
    (0x00CC6, 0x00CC6, T), (0x00CCC, 0x00CCD, T), (0x00CE2, 0x00CE3, T),
    (0x00D00, 0x00D01, T), (0x00D3B, 0x00D3C, T), (0x00D41, 0x00D44, T),
    (0x00D4D, 0x00D4D, T), (0x00D62, 0x00D63, T), (0x00D81, 0x00D81, T),
    (0x00DCA, 0x00DCA, T), (0x00DD2, 0x00DD4, T), (0x00DD6, 0x00DD6, T),
    (0x00E31, 0x00E31, T), (0x00E34, 0x00E3A, T), (0x00E47, 0x00E4E, T),
    (0x00EB1, 0x00EB1, T), (0x00EB4, 0x00EBC, T), (0x00EC8, 0x00ECE, T),
    (0x00F18, 0x00F19, T), (0x00F35, 0x00F35, T), (0x00F37, 0x00F37, T),
    (0x00F39, 0x00F39, T), (0x00F71, 0x00F7E, T), (0x00F80, 0x00F84, T),
    (0x00F86, 0x00F87, T), (0x00F8D, 0x00F97, T), (0x00F99, 0x00FBC, T),
    (0x00FC6, 0x00FC6, T), (0x0102D, 0x01030, T), (0x01032, 0x01037, T),
    (0x01039, 0x0103A, T), (0x0103D, 0x0103E, T), (0x01058, 0x01059, T),
    (0x0105E, 0x01060, T), (0x01071, 0x01074, T), (0x01082, 0x01082, T),
    (0x01085, 0x01086, T), (0x0108D, 0x0108D, T), (0x0109D, 0x0109D, T),
    (0x0135D, 0x0135F, T), (0x01712, 0x01714, T), (0x01732, 0x01733, T),
    (0x01752, 0x01753, T), (0x01772, 0x01773, T), (0x017B4, 0x017B5, T),
    (0x017B7, 0x017BD, T), (0x017C6, 0x017C6, T), (0x017C9, 0x017D3, T),
    (0x017DD, 0x017DD, T), (0x01807, 0x01807, D), (0x0180A, 0x0180A, C),
    (0x0180B, 0x0180D, T), (0x0180F, 0x0180F, T), (0x01820, 0x01878, D),
    (0x01885, 0x01886, T), (0x01887, 0x018A8, D), (0x018A9, 0x018A9, T),
    (0x018AA, 0x018AA, D), (0x01920, 0x01922, T), (0x01927, 0x01928, T),
    (0x01932, 0x01932, T), (0x01939, 0x0193B, T), (0x01A17, 0x01A18, T),
    (0x01A1B, 0x01A1B, T), (0x01A56, 0x01A56, T), (0x01A58, 0x01A5E, T),
    (0x01A60, 0x01A60, T), (0x01A62, 0x01A62, T), (0x01A65, 0x01A6C, T),
    (0x01A73, 0x01A7C, T), (0x01A7F, 0x01A7F, T), (0x01AB0, 0x01ADD, T),
    (0x01AE0, 0x01AEB, T), (0x01B00, 0x01B03, T), (0x01B34, 0x01B34, T),
    (0x01B36, 0x01B3A, T), (0x01B3C, 0x01B3C, T), (0x01B42, 0x01B42, T),
    (0x01B6B, 0x01B73, T), (0x01B80, 0x01B81, T), (0x01BA2, 0x01BA5, T),
    (0x01BA8, 0x01BA9, T), (0x01BAB, 0x01BAD, T), (0x01BE6, 0x01BE6, T),
    (0x01BE8, 0x01BE9, T), (0x01BED, 0x01BED, T), (0x01BEF, 0x01BF1, T),
    (0x01C2C, 0x01C33, T), (0x01C36, 0x01C37, T), (0x01CD0, 0x01CD2, T),
    (0x01CD4, 0x01CE0, T), (0x01CE2, 0x01CE8, T), (0x01CED, 0x01CED, T),
    (0x01CF4, 0x01CF4, T), (0x01CF8, 0x01CF9, T), (0x01DC0, 0x01DFF, T),
    (0x0200B, 0x0200B, T), (0x0200D, 0x0200D, C), (0x0200E, 0x0200F, T),
    (0x0202A, 0x0202E, T), (0x02060, 0x02064, T), (0x0206A, 0x0206F, T),
    (0x020D0, 0x020F0, T), (0x02CEF, 0x02CF1, T), (0x02D7F, 0x02D7F, T),
    (0x02DE0, 0x02DFF, T), (0x0302A, 0x0302D, T), (0x03099, 0x0309A, T),
    (0x0A66F, 0x0A672, T), (0x0A674, 0x0A67D, T), (0x0A69E, 0x0A69F, T),
    (0x0A6F0, 0x0A6F1, T), (0x0A802, 0x0A802, T), (0x0A806, 0x0A806, T),
    (0x0A80B, 0x0A80B, T), (0x0A825, 0x0A826, T), (0x0A82C, 0x0A82C, T),
    (0x0A840, 0x0A871, D), (0x0A872, 0x0A872, L), (0x0A8C4, 0x0A8C5, T),
    (0x0A8E0, 0x0A8F1, T), (0x0A8FF, 0x0A8FF, T), (0x0A926, 0x0A92D, T),
    (0x0A947, 0x0A951, T), (0x0A980, 0x0A982, T), (0x0A9B3, 0x0A9B3, T),
    (0x0A9B6, 0x0A9B9, T), (0x0A9BC, 0x0A9BD, T), (0x0A9E5, 0x0A9E5, T),
    (0x0AA29, 0x0AA2E, T), (0x0AA31, 0x0AA32, T), (0x0AA35, 0x0AA36, T),
    (0x0AA43, 0x0AA43, T), (0x0AA4C, 0x0AA4C, T), (0x0AA7C, 0x0AA7C, T),
    (0x0AAB0, 0x0AAB0, T), (0x0AAB2, 0x0AAB4, T), (0x0AAB7, 0x0AAB8, T),
    (0x0AABE, 0x0AABF, T), (0x0AAC1, 0x0AAC1, T), (0x0AAEC, 0x0AAED, T),
    (0x0AAF6, 0x0AAF6, T), (0x0ABE5, 0x0ABE5, T), (0x0ABE8, 0x0ABE8, T),
    (0x0ABED, 0x0ABED, T), (0x0FB1E, 0x0FB1E, T), (0x0FE00, 0x0FE0F, T),
    (0x0FE20, 0x0FE2F, T), (0x0FEFF, 0x0FEFF, T), (0x0FFF9, 0x0FFFB, T),
    (0x101FD, 0x101FD, T), (0x102E0, 0x102E0, T), (0x10376, 0x1037A, T),
    (0x10A01, 0x10A03, T), (0x10A05, 0x10A06, T), (0x10A0C, 0x10A0F, T),
    (0x10A38, 0x10A3A, T), (0x10A3F, 0x10A3F, T), (0x10AC0, 0x10AC4, D),
    (0x10AC5, 0x10AC5, R), (0x10AC7, 0x10AC7, R), (0x10AC9, 0x10ACA, R),
    (0x10ACD, 0x10ACD, L), (0x10ACE, 0x10AD2, R), (0x10AD3, 0x10AD6, D),
    (0x10AD7, 0x10AD7, L), (0x10AD8, 0x10ADC, D), (0x10ADD, 0x10ADD, R),
    (0x10ADE, 0x10AE0, D), (0x10AE1, 0x10AE1, R), (0x10AE4, 0x10AE4, R),
    (0x10AE5, 0x10AE6, T), (0x10AEB, 0x10AEE, D), (0x10AEF, 0x10AEF, R),
    (0x10B80, 0x10B80, D), (0x10B81, 0x10B81, R), (0x10B82, 0x10B82, D),
    (0x10B83, 0x10B85, R), (0x10B86, 0x10B88, D), (0x10B89, 0x10B89, R),
    (0x10B8A, 0x10B8B, D), (0x10B8C, 0x10B8C, R), (0x10B8D, 0x10B8D, D),
    (0x10B8E, 0x10B8F, R), (0x10B90, 0x10B90, D), (0x10B91, 0x10B91, R),
    (0x10BA9, 0x10BAC, R), (0x10BAD, 0x10BAE, D), (0x10D00, 0x10D00, L),
    (0x10D01, 0x10D21, D), (0x10D22, 0x10D22, R), (0x10D23, 0x10D23, D),
    (0x10D24, 0x10D27, T), (0x10D69, 0x10D6D, T), (0x10EAB, 0x10EAC, T),
    (0x10EC2, 0x10EC2, R), (0x10EC3, 0x10EC4, D), (0x10EC6, 0x10EC7, D),
    (0x10EFA, 0x10EFF, T), (0x10F30, 0x10F32, D), (0x10F33, 0x10F33, R),
    (0x10F34, 0x10F44, D), (0x10F46, 0x10F50, T), (0x10F51, 0x10F53, D),
    (0x10F54, 0x10F54, R), (0x10F70, 0x10F73, D), (0x10F74, 0x10F75, R),
    (0x10F76, 0x10F81, D), (0x10F82, 0x10F85, T), (0x10FB0, 0x10FB0, D),
    (0x10FB2, 0x10FB3, D), (0x10FB4, 0x10FB6, R), (0x10FB8, 0x10FB8, D),
    (0x10FB9, 0x10FBA, R), (0x10FBB, 0x10FBC, D), (0x10FBD, 0x10FBD, R),
    (0x10FBE, 0x10FBF, D), (0x10FC1, 0x10FC1, D), (0x10FC2, 0x10FC3, R),
    (0x10FC4, 0x10FC4, D), (0x10FC9, 0x10FC9, R), (0x10FCA, 0x10FCA, D),
    (0x10FCB, 0x10FCB, L), (0x11001, 0x11001, T), (0x11038, 0x11046, T),
    (0x11070, 0x11070, T), (0x11073, 0x11074, T), (0x1107F, 0x11081, T),
    (0x110B3, 0x110B6, T), (0x110B9, 0x110BA, T), (0x110C2, 0x110C2, T),
    (0x11100, 0x11102, T), (0x11127, 0x1112B, T), (0x1112D, 0x11134, T),
    (0x11173, 0x11173, T), (0x11180, 0x11181, T), (0x111B6, 0x111BE, T),
    (0x111C9, 0x111CC, T), (0x111CF, 0x111CF, T), (0x1122F, 0x11231, T),
    (0x11234, 0x11234, T), (0x11236, 0x11237, T), (0x1123E, 0x1123E, T),
    (0x11241, 0x11241, T), (0x112DF, 0x112DF, T), (0x112E3, 0x112EA, T),
    (0x11300, 0x11301, T), (0x1133B, 0x1133C, T), (0x11340, 0x11340, T),
    (0x11366, 0x1136C, T), (0x11370, 0x11374, T), (0x113BB, 0x113C0, T),
    (0x113CE, 0x113CE, T), (0x113D0, 0x113D0, T), (0x113D2, 0x113D2, T),
    (0x113E1, 0x113E2, T), (0x11438, 0x1143F, T), (0x11442, 0x11444, T),
    (0x11446, 0x11446, T), (0x1145E, 0x1145E, T), (0x114B3, 0x114B8, T),
    (0x114BA, 0x114BA, T), (0x114BF, 0x114C0, T), (0x114C2, 0x114C3, T),
    (0x115B2, 0x115B5, T), (0x115BC, 0x115BD, T), (0x115BF, 0x115C0, T),
    (0x115DC, 0x115DD, T), (0x11633, 0x1163A, T), (0x1163D, 0x1163D, T),
    (0x1163F, 0x11640, T), (0x116AB, 0x116AB, T), (0x116AD, 0x116AD, T),
    (0x116B0, 0x116B5, T), (0x116B7, 0x116B7, T), (0x1171D, 0x1171D, T),
    (0x1171F, 0x1171F, T), (0x11722, 0x11725, T), (0x11727, 0x1172B, T),
    (0x1182F, 0x11837, T), (0x11839, 0x1183A, T), (0x1193B, 0x1193C, T),
    (0x1193E, 0x1193E, T), (0x11943, 0x11943, T), (0x119D4, 0x119D7, T),
    (0x119DA, 0x119DB, T), (0x119E0, 0x119E0, T), (0x11A01, 0x11A0A, T),
    (0x11A33, 0x11A38, T), (0x11A3B, 0x11A3E, T), (0x11A47, 0x11A47, T),
    (0x11A51, 0x11A56, T), (0x11A59, 0x11A5B, T), (0x11A8A, 0x11A96, T),
    (0x11A98, 0x11A99, T), (0x11B60, 0x11B60, T), (0x11B62, 0x11B64, T),
    (0x11B66, 0x11B66, T), (0x11C30, 0x11C36, T), (0x11C38, 0x11C3D, T),
    (0x11C3F, 0x11C3F, T), (0x11C92, 0x11CA7, T), (0x11CAA, 0x11CB0, T),
    (0x11CB2, 0x11CB3, T), (0x11CB5, 0x11CB6, T), (0x11D31, 0x11D36, T),
    (0x11D3A, 0x11D3A, T), (0x11D3C, 0x11D3D, T), (0x11D3F, 0x11D45, T),
    (0x11D47, 0x11D47, T), (0x11D90, 0x11D91, T), (0x11D95, 0x11D95, T),
    (0x11D97, 0x11D97, T), (0x11EF3, 0x11EF4, T), (0x11F00, 0x11F01, T),
    (0x11F36, 0x11F3A, T), (0x11F40, 0x11F40, T), (0x11F42, 0x11F42, T),
    (0x11F5A, 0x11F5A, T), (0x13430, 0x13440, T), (0x13447, 0x13455, T),
    (0x1611E, 0x16129, T), (0x1612D, 0x1612F, T), (0x16AF0, 0x16AF4, T),
    (0x16B30, 0x16B36, T), (0x16F4F, 0x16F4F, T), (0x16F8F, 0x16F92, T),
    (0x16FE4, 0x16FE4, T), (0x1BC9D, 0x1BC9E, T), (0x1BCA0, 0x1BCA3, T),
    (0x1CF00, 0x1CF2D, T), (0x1CF30, 0x1CF46, T), (0x1D167, 0x1D169, T),
    (0x1D173, 0x1D182, T), (0x1D185, 0x1D18B, T), (0x1D1AA, 0x1D1AD, T),
    (0x1D242, 0x1D244, T), (0x1DA00, 0x1DA36, T), (0x1DA3B, 0x1DA6C, T),
    (0x1DA75, 0x1DA75, T), (0x1DA84, 0x1DA84, T), (0x1DA9B, 0x1DA9F, T),
    (0x1DAA1, 0x1DAAF, T), (0x1E000, 0x1E006, T), (0x1E008, 0x1E018, T),
    (0x1E01B, 0x1E021, T), (0x1E023, 0x1E024, T), (0x1E026, 0x1E02A, T),
    (0x1E08F, 0x1E08F, T), (0x1E130, 0x1E136, T), (0x1E2AE, 0x1E2AE, T),
    (0x1E2EC, 0x1E2EF, T), (0x1E4EC, 0x1E4EF, T), (0x1E5EE, 0x1E5EF, T),
    (0x1E6E3, 0x1E6E3, T), (0x1E6E6, 0x1E6E6, T), (0x1E6EE, 0x1E6EF, T),
    (0x1E6F5, 0x1E6F5, T), (0x1E8D0, 0x1E8D6, T), (0x1E900, 0x1E943, D),
    (0x1E944, 0x1E94B, T), (0xE0001, 0xE0001, T), (0xE0020, 0xE007F, T),
    (0xE0100, 0xE01EF, T),
];
