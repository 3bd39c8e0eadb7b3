// kem/src/ntru/test_vectors.rs

//! Known-answer vectors for trit generation, index sampling and key
//! generation. Trit sequences are hex strings of the digits 00, 01 and 02.

/// Seed of the MGF1-SHA1 trit and index vectors
pub const SEED_SHA1: &str = concat!(
    "eda5c3bcafb3207d14a154f78b37f28d8c9bd563573811c2b5cabf06434519d5",
    "e736d02921da022045f65f0f10042ae36a1dd59f1d66448ffac6caa46e3b0066",
    "a6c9805cf52dd772c6d44f3072a2ade033e855d5e6d6001da868ff97368af4d6",
    "f1b67e1f06cb57cb3538f22df620",
);

/// MGF1-SHA1 trits of `SEED_SHA1`
pub const TRITS_SHA1: &str = concat!(
    "0102010000010101020001000101010002000101000000010100020002020102",
    "0202010201010000020001010100000000010102000001000100020000010002",
    "0100000002000000010202000002000101020101000001010102020102000002",
    "0100000100010100000001020200010201020002000000020102000000020000",
    "0002020100020001020002010002020100020102020002000201020200020001",
    "0102020202010001000202000101020202000001000200010002010201000101",
    "0200000201010200010201010001000201010102010002000200000202010000",
    "0202000101000001010001010201020202000000000100000102010200020101",
    "0100020201020201000100020202010201000001000101010101020000020100",
    "0201020100020200000102010200010201010200020002010101000000010201",
    "0202010201010201020002020100000102000101020000000102020102000002",
    "0100020202010100020102010202010201010001010101020002020100010102",
    "0102000201000100010001020001010000010102000202000000010100010001",
    "0100010100010200010100010200000102020000020102",
);

/// Seed of the MGF1-SHA256 trit and index vectors
pub const SEED_SHA256: &str = concat!(
    "52c5dd1eef761b5308e4863f91129869c59ddef6fcfa93ce325266f9c997f642",
    "002c64ed1a6b140a4b04cf6d2d820a07a23bdece198a39431661299868eae5cc",
    "0af8e97126f107362c071eebe428a2f4a812c0c82037f8f26cafdc6f2ed06258",
    "d237036dfa6e1aac9fca56c6a45241e80f1b0cb9e6badee1035ec2e5f8f4f346",
    "3a12c01f3a00d09118dd53e422f526a454ee20f080",
);

/// MGF1-SHA256 trits of `SEED_SHA256`
pub const TRITS_SHA256: &str = concat!(
    "0102020202010202000002000000000102020200020000020201020000010201",
    "0000000100020201010200000001020002020102010001000102010101020001",
    "0002010100000001020000010201020002010101020202020100000200020001",
    "0100020202000100020201000100010000020200000102000101010000020002",
    "0102020200000201000200010001020001020001000102000202000102020102",
    "0202000201010100000100020000010001020000010201000201010000020102",
    "0202010201010202000200000200000101020000000102010101010000000200",
    "0200020201020200000101010001000100010202000201010002010201020100",
    "0001000001000100020002000001020002000101000200000102010201020100",
    "0101020201010000020102000100020000010200020001010202020200000102",
    "0101010002010202000200010202000101010000020001000100020102000201",
    "0201020200020100020102000002000102010102000000000102000102020100",
    "0001020102000001010000000100000002000102010200000002010000000102",
    "0200000002020101000100020200020102010002020200000001010201000000",
    "0001020201020102000200020101010201020102010100010002000000020102",
    "0202020001010100010002000201000102010100010201000002010001010202",
    "0101010202020100000000010100000202020202000102000102000101000101",
    "0202000101000202010101020102020101000100020201000202020202010002",
    "0202010200020000000000010200010001",
);

/// Prefix of `SEED_SHA1` used for index sampling
pub const SEED_SHA1_INDEX_LEN: usize = 24;

/// Prefix of `SEED_SHA256` used for index sampling
pub const SEED_SHA256_INDEX_LEN: usize = 40;

/// Product-form indices, N = 439, c = 9, counts 9/8/5
pub const INDICES_EES439EP1: [u16; 44] = [
     367,  413,   16,  214,  114,  128,   42,  268,  346,  329,  119,  303,  208,  287,  150,
       3,   45,  321,  110,  109,  272,  430,   80,  305,   51,  381,  322,  140,  207,  315,
     206,  186,   56,    5,  273,  177,   44,  100,  205,  210,   98,  191,    8,  336,
];

/// Indices, N = 613, c = 11, dF = 55
pub const INDICES_EES613EP1: [u16; 110] = [
     245,  391,  251,  428,  301,    2,  176,  296,  461,  224,  590,  215,  250,   91,  395,
     363,   58,  537,  278,  291,  247,   33,  140,  447,  172,  514,  424,  412,   95,   94,
     281,  159,  196,  302,  277,   63,  404,  150,  608,  315,  195,  334,  207,  376,  398,
       0,  309,  486,  516,   86,  267,  139,  130,   38,  141,  258,   21,  341,  526,  388,
     194,  116,  138,  524,  547,  383,  542,  406,  270,  438,  240,  445,  527,  168,  320,
     186,  327,  212,  543,   82,  606,  131,  294,  392,  477,  430,  583,  142,  253,  434,
     134,  458,  559,  414,  162,  407,  580,  577,  191,  109,  554,  523,   32,   62,  297,
     283,  268,   54,  539,    5,
];

/// Product-form indices, N = 743, c = 13, counts 11/11/15
pub const INDICES_EES743EP1: [u16; 74] = [
     285,   62,  136,  655,  460,   35,  450,  208,  340,  212,   61,  234,  454,   52,  520,
     399,  315,  616,  496,   88,  280,  543,  508,  237,  553,   39,  214,  253,  720,  291,
     586,  615,  635,  596,   62,  499,  301,  176,  271,  659,  372,  185,  621,  350,  683,
     180,  717,  509,  641,  738,  666,  171,  639,  606,  353,  706,  237,  358,  410,  423,
     197,  501,  261,  654,  658,  701,  377,  182,  548,  287,  700,  403,  248,  137,
];

/// Indices, N = 1171, c = 12, dF = 106
pub const INDICES_EES1171EP1: [u16; 212] = [
     514,  702,  760,  505,  262,  486,  695,  783,  533,   74,  403,  847,  170, 1019,  568,
     676, 1057,  277, 1021,  238,  203,  884,  124,   87,   65,   93,  131,  881, 1102,  133,
     459,  462,   92,   40,    5, 1152, 1158,  297,  599,  299,    7,  458,  347,  343,  173,
    1044,  264,  871,  819,  679,  328,  438,  990,  982,  308, 1135,  423,  470,  254,  295,
    1029,  892,  759,  789,  123,  939,  749,  353, 1062,  145,  562,  337,  550,  102,  549,
     821, 1098,  823,   96,  365,  135, 1110,  334,  391,  638,  963,  962, 1002, 1069,  993,
     983,  649, 1056,  399,  385,  715,  582,  799,  161,  512,  629,  979,  250,   37,  213,
     929,  413,  566,  336,  727,  160,  616, 1170,  748,  282, 1115,  325,  994,  189,  500,
     913,  332, 1118,  753,  946,  775,   59,  809,  782,  612,  909, 1090,  223,  777,  940,
     866, 1032,  471,  298,  969,  192,  411,  721,  476,  910, 1045, 1027,  812,  352,  487,
     215,  625,  808,  230,  602,  457,  900,  416,  985,  850,  908,  155,  670,  669, 1054,
     400, 1126,  733,  647,  786,  195,  148,  362, 1094,  389, 1086, 1166,  231,  436,  210,
     333,  824,  785,  826,  658,  472,  639, 1046, 1028,  519,  422,   80,  924, 1089,  547,
    1157,  579,    2,  508, 1040,  998,  902, 1058,  600,  220,  805,  945,  140, 1117,  179,
     536,  191,
];

/// DRBG entropy for the EES401EP1 private key
pub const ENTROPY_EES401EP1: &str = "0c2f24e1a48126a26ceacd1af3eb3dbfeaaec30dc1";

/// EES401EP1 private key generated from `ENTROPY_EES401EP1`
pub const PRIVKEY_EES401EP1: &str = concat!(
    "02030002043ef3cb7a581375bb87f5bf2e18ae03afb83385d8bf8ab58ca6df03",
    "901ee483a49540b5089229d883a842b269c2008bae80004f3dddfbdb9ad80fff",
    "bc21d5e6049cdd3b2d164bc73dbedebb6ff48a31cd2319c23ce1e2eee4e72efc",
    "5cddad0c9d98c5182a80219361c49a16e89bf73b6d06919e7159be8e6561b269",
    "9c82580d637a1f2a1c2c928c8dca2b452479db7f1d2fab888c1de3158fcd468c",
    "4520881c17e0e589f460563c6b9f2ad9d0ae3bb6c2b758c66e0936210bdde952",
    "332739c851596925c63d195c5e74d062d92690c76492a872d1771f78c511bd5d",
    "3c1b1f8b5be45da1276d20243253f3b0e67161ccfc4a06dabed79f2feb44d08a",
    "7d8e82f584cf8ee54ba43077bd14b9750268df718981f295c3676e37e4d0c91e",
    "02de2d7999e87d5c99f21ade129bd1839b01d3eb2b8e9ca519e82efe236ead8f",
    "3cafb9e6db07a431022b6aa0fb516cd026d5ad296510cef8844d1e3792a2d1fa",
    "f6c0364c233a42aab80d4ed44061d53662237c1c5eea16ad4f30f91699cec550",
    "ac8f6f98d7e3896e3a12cea7a41774dcdbfafff935d7f57703f5bf816c9f62a6",
    "8a5ba3ef9dc3f63a6ac04271af90ca1d8678d72cfeb699158c1042922c054392",
    "69058d9ebcab8f28aa4bfb25d9ad29ff336514c3751fcffc2083bfb9a54b7bd9",
    "075ca1d15a3e94f803deb8941192807757451e6ba515db48b69e02f1614aac1d",
    "49bca93f0350ac028e84e0123776bc4af9c67436fc921d590c04d214b711e9e2",
    "fe0ce1da8bca10a160b6575100d65b550960e800404556ba831e3612594b1900",
    "53ae62a62939ed8724371e1bcf3f3a7131b5508d4b5353753f3339092a78a871",
    "3e63c56173b6e17116da06bf3f22748908d2050b16c8f0174ea265676d02",
);

/// DRBG entropy for the EES743EP1 private key
pub const ENTROPY_EES743EP1: &str = concat!(
    "9bab57db2c6083489fc9708f69f7b4bb635c9a63078017d3cdb15779fe8d8170",
    "eb50fa05fb97b2ab25edd8181cfe967d",
);

/// EES743EP1 private key generated from `ENTROPY_EES743EP1`
pub const PRIVKEY_EES743EP1: &str = concat!(
    "020300061014537356f5a934dea64d46059e80aeb67491fffb48d35c61124602",
    "9f53458747bd6b26f736d3991bd7eaa3a894ff93467c2c5f878c38b37bc649e2",
    "88ca6789d06d7cae7c9884da6b9392ef4ad14ad25b13f859152ebc708d2da947",
    "a199193f67e818a71707b314f620a1d833e8086ac1399908b488eb487dfbf5ef",
    "030d25b798f3f11563e40ffd549f56e9d144e5896614911cfdd6fd38ae39e3f7",
    "cd77c2ea2ee4b72bba7ad175b8286518f4c6bdd0177eea867efc95d64c9201c3",
    "ff049bf8d6b38f72ef640961f8e448fc0deeefa29f3a2b1afb8ba09c110b9775",
    "307cb89fee3b53857de9cbc44dd77f591072193ac938fee8b306558da25a3d79",
    "670e90c9256d459c39795f18359fc149086f1c47090d497c3c7bb109921c4e5a",
    "da749ebb559dbb1e432862af02b01aea130a700f600f62a24e1fb2ea06dd1802",
    "6cf382f1807fa72fccc618eaff1fadc6ba0c0e04b2581db601a397df7d9bb50a",
    "ad302bc5674007f1d56c1110e16930ad9006dbf8ea929b3957387be4b2a289fd",
    "b16d8841624d18b63f1281dee6dc4a316126b14b95c169dcdcacd015fc21c520",
    "5f977641c1f2d7951d25233686fa7ef4149f9d9fb2bb251dd57a6f9ef7ef9d63",
    "1ed5de6ae646481fe10c4d82c9193b65a40613b704b162f708aeed426dcc6ca6",
    "0606413e0c894cbd004f0ea972062182d2b66cb0b0015bdd05ce716e0058c7a6",
    "5bf6fb6b62b1e84dacc06bf44069ee0de782618d3501974ef2ccf57fbfe4ec9c",
    "c4d2d9657898d8b0faa8fbb0ce225d0b27df0e6342fe891399b2020bf604b6af",
    "9f8ca6170dd95b45e4085351e0d52272bead7469b9fb91f8c18928712762b1f0",
    "fd78bc82fe76be7b47793271add67646fb32e84b989ac685f2f18aecc24e9b2f",
    "2d6fc99bb614356dd65bf3025ae5bd00f76e51a7db19ae0101059423f75b0779",
    "ff39589c2af77e5d81f959feb99a96631f65f6f03dead7c28acfb558747723d6",
    "7258a8ae318a59ea69146a207879285ae1766fa61a9e47d2af63f806f6d8d514",
    "a8d1ee96cebb8e22692f5206b66fc89996eac61d964c6995fe74043c55d95fe0",
    "412143215a505d8be8b2511b7c6350ae974fba7df2b6b6161d479e1968d46b2b",
    "75cdae653338f66dc73e46989e988b4511a71205b001c351a0ee7c16d14296c4",
    "f07b71cd5038a4b06e6fe0bdc4f7962bf16d9ff37189fab444a432dcb2551331",
    "832966213e89f878979c64f92c0a88bcca6f8342f6d700c41952b031a8bae8d4",
    "ad4b5dc001206cbb1d9a1dd419fd33aba0545091e9755c7e7eb32479ae103cb4",
    "b70a1d86ad0695cb849b0e8b777e3ed2a6dfad4efb6923ac7acbaab022ddd2c6",
    "c7add7deec6f084154d552dc77e472f916b1c9afb13b1899209f79637b07c735",
    "dfbbce66931bf5822567c1f2f0890fef840d63b67bd0408edb94cc713cdb3614",
    "34fda0b0c14531f88dd823b10514a9553a1a374868893f1525d499534c859878",
    "1d354a83799a29902b45760c13804ae040ed6b2e2a43a928b02f89016b398c5e",
    "8061d9ee0f4175b5aeb6c242498d89d8f4781d9046264c56b7c0d9987b07a120",
);
