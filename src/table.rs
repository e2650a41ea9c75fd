//! Truncated 64-bit approximations of the powers of ten in `1e-347..=1e312`.
//!
//! Entry `i` describes `10^(OFFSET - i)`: its `mantissa` is
//! `floor(10^(OFFSET - i) * 2^(1145 - exponent))`, normalized so that bit 63 is set.

/// Decimal exponent of the entry at index 0.
pub const OFFSET: i32 = 312;

/// Number of entries in the table.
pub const LEN: usize = 660;

/// Scale of [`PowerOfTen::exponent`]: the binary64 bias, plus the 64 bits dropped by the high-word
/// multiply, plus the position of the normalization window.
pub const EXPONENT_SCALE: i32 = 1023 + 64 + 58;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PowerOfTen {
    pub mantissa: u64,
    pub exponent: i32,
}

impl PowerOfTen {
    #[inline]
    const fn new(mantissa: u64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /// Decimal exponent this entry approximates, given its index.
    #[inline]
    pub const fn decimal_exponent(index: usize) -> i32 {
        OFFSET - index as i32
    }
}

/// Index of `10^decimal_exponent`. The result may lie outside `0..LEN`.
#[inline]
pub const fn index(decimal_exponent: i32) -> isize {
    OFFSET as isize - decimal_exponent as isize
}

#[inline]
pub fn get(index: usize) -> Option<PowerOfTen> {
    POWERS_OF_TEN.get(index).copied()
}

#[rustfmt::skip]
pub static POWERS_OF_TEN: [PowerOfTen; LEN] = [
    PowerOfTen::new(0xadd57a27d29339f6, 2118), // 1e312
    PowerOfTen::new(0x8b112e86420f6191, 2115), // 1e311
    PowerOfTen::new(0xde81e40a034bcf4f, 2111), // 1e310
    PowerOfTen::new(0xb201833b35d63f73, 2108), // 1e309
    PowerOfTen::new(0x8e679c2f5e44ff8f, 2105), // 1e308
    PowerOfTen::new(0xe3d8f9e563a198e5, 2101), // 1e307
    PowerOfTen::new(0xb6472e511c81471d, 2098), // 1e306
    PowerOfTen::new(0x91d28b7416cdd27e, 2095), // 1e305
    PowerOfTen::new(0xe950df20247c83fd, 2091), // 1e304
    PowerOfTen::new(0xbaa718e68396cffd, 2088), // 1e303
    PowerOfTen::new(0x95527a5202df0ccb, 2085), // 1e302
    PowerOfTen::new(0xeeea5d5004981478, 2081), // 1e301
    PowerOfTen::new(0xbf21e44003acdd2c, 2078), // 1e300
    PowerOfTen::new(0x98e7e9cccfbd7dbd, 2075), // 1e299
    PowerOfTen::new(0xf4a642e14c6262c8, 2071), // 1e298
    PowerOfTen::new(0xc3b8358109e84f07, 2068), // 1e297
    PowerOfTen::new(0x9c935e00d4b9d8d2, 2065), // 1e296
    PowerOfTen::new(0xfa856334878fc150, 2061), // 1e295
    PowerOfTen::new(0xc86ab5c39fa63440, 2058), // 1e294
    PowerOfTen::new(0xa0555e361951c366, 2055), // 1e293
    PowerOfTen::new(0x80444b5e7aa7cf85, 2052), // 1e292
    PowerOfTen::new(0xcd3a1230c43fb26f, 2048), // 1e291
    PowerOfTen::new(0xa42e74f3d032f525, 2045), // 1e290
    PowerOfTen::new(0x83585d8fd9c25db7, 2042), // 1e289
    PowerOfTen::new(0xd226fc195c6a2f8c, 2038), // 1e288
    PowerOfTen::new(0xa81f301449ee8c70, 2035), // 1e287
    PowerOfTen::new(0x867f59a9d4bed6c0, 2032), // 1e286
    PowerOfTen::new(0xd732290fbacaf133, 2028), // 1e285
    PowerOfTen::new(0xac2820d9623bf429, 2025), // 1e284
    PowerOfTen::new(0x89b9b3e11b6329ba, 2022), // 1e283
    PowerOfTen::new(0xdc5c5301c56b75f7, 2018), // 1e282
    PowerOfTen::new(0xb049dc016abc5e5f, 2015), // 1e281
    PowerOfTen::new(0x8d07e33455637eb2, 2012), // 1e280
    PowerOfTen::new(0xe1a63853bbd26451, 2008), // 1e279
    PowerOfTen::new(0xb484f9dc9641e9da, 2005), // 1e278
    PowerOfTen::new(0x906a617d450187e2, 2002), // 1e277
    PowerOfTen::new(0xe7109bfba19c0c9d, 1998), // 1e276
    PowerOfTen::new(0xb8da1662e7b00a17, 1995), // 1e275
    PowerOfTen::new(0x93e1ab8252f33b45, 1992), // 1e274
    PowerOfTen::new(0xec9c459d51852ba2, 1988), // 1e273
    PowerOfTen::new(0xbd49d14aa79dbc82, 1985), // 1e272
    PowerOfTen::new(0x976e41088617ca01, 1982), // 1e271
    PowerOfTen::new(0xf24a01a73cf2dccf, 1978), // 1e270
    PowerOfTen::new(0xc1d4ce1f63f57d72, 1975), // 1e269
    PowerOfTen::new(0x9b10a4e5e9913128, 1972), // 1e268
    PowerOfTen::new(0xf81aa16fdc1b81da, 1968), // 1e267
    PowerOfTen::new(0xc67bb4597ce2ce48, 1965), // 1e266
    PowerOfTen::new(0x9ec95d1463e8a506, 1962), // 1e265
    PowerOfTen::new(0xfe0efb53d30dd4d7, 1958), // 1e264
    PowerOfTen::new(0xcb3f2f7642717713, 1955), // 1e263
    PowerOfTen::new(0xa298f2c501f45f42, 1952), // 1e262
    PowerOfTen::new(0x8213f56a67f6b29b, 1949), // 1e261
    PowerOfTen::new(0xd01fef10a657842c, 1945), // 1e260
    PowerOfTen::new(0xa67ff273b8460356, 1942), // 1e259
    PowerOfTen::new(0x8533285c936b35de, 1939), // 1e258
    PowerOfTen::new(0xd51ea6fa85785631, 1935), // 1e257
    PowerOfTen::new(0xaa7eebfb9df9de8d, 1932), // 1e256
    PowerOfTen::new(0x8865899617fb1871, 1929), // 1e255
    PowerOfTen::new(0xda3c0f568cc4f3e8, 1925), // 1e254
    PowerOfTen::new(0xae9672aba3d0c320, 1922), // 1e253
    PowerOfTen::new(0x8bab8eefb6409c1a, 1919), // 1e252
    PowerOfTen::new(0xdf78e4b2bd342cf6, 1915), // 1e251
    PowerOfTen::new(0xb2c71d5bca9023f8, 1912), // 1e250
    PowerOfTen::new(0x8f05b1163ba6832d, 1909), // 1e249
    PowerOfTen::new(0xe4d5e82392a40515, 1905), // 1e248
    PowerOfTen::new(0xb7118682dbb66a77, 1902), // 1e247
    PowerOfTen::new(0x92746b9be2f8552c, 1899), // 1e246
    PowerOfTen::new(0xea53df5fd18d5513, 1895), // 1e245
    PowerOfTen::new(0xbb764c4ca7a4440f, 1892), // 1e244
    PowerOfTen::new(0x95f83d0a1fb69cd9, 1889), // 1e243
    PowerOfTen::new(0xeff394dcff8a948e, 1885), // 1e242
    PowerOfTen::new(0xbff610b0cc6edd3f, 1882), // 1e241
    PowerOfTen::new(0x9991a6f3d6bf1765, 1879), // 1e240
    PowerOfTen::new(0xf5b5d7ec8acb58a2, 1875), // 1e239
    PowerOfTen::new(0xc491798a08a2ad4e, 1872), // 1e238
    PowerOfTen::new(0x9d412e0806e88aa5, 1869), // 1e237
    PowerOfTen::new(0xfb9b7cd9a4a7443c, 1865), // 1e236
    PowerOfTen::new(0xc94930ae1d529cfc, 1862), // 1e235
    PowerOfTen::new(0xa1075a24e4421730, 1859), // 1e234
    PowerOfTen::new(0x80d2ae83e9ce78f3, 1856), // 1e233
    PowerOfTen::new(0xce1de40642e3f4b9, 1852), // 1e232
    PowerOfTen::new(0xa4e4b66b68b65d60, 1849), // 1e231
    PowerOfTen::new(0x83ea2b892091e44d, 1846), // 1e230
    PowerOfTen::new(0xd31045a8341ca07c, 1842), // 1e229
    PowerOfTen::new(0xa8d9d1535ce3b396, 1839), // 1e228
    PowerOfTen::new(0x8714a775e3e95c78, 1836), // 1e227
    PowerOfTen::new(0xd8210befd30efa5a, 1832), // 1e226
    PowerOfTen::new(0xace73cbfdc0bfb7b, 1829), // 1e225
    PowerOfTen::new(0x8a5296ffe33cc92f, 1826), // 1e224
    PowerOfTen::new(0xdd50f1996b947518, 1822), // 1e223
    PowerOfTen::new(0xb10d8e1456105dad, 1819), // 1e222
    PowerOfTen::new(0x8da471a9de737e24, 1816), // 1e221
    PowerOfTen::new(0xe2a0b5dc971f303a, 1812), // 1e220
    PowerOfTen::new(0xb54d5e4a127f59c8, 1809), // 1e219
    PowerOfTen::new(0x910ab1d4db9914a0, 1806), // 1e218
    PowerOfTen::new(0xe8111c87c5c1ba99, 1802), // 1e217
    PowerOfTen::new(0xb9a74a0637ce2ee1, 1799), // 1e216
    PowerOfTen::new(0x9485d4d1c63e8be7, 1796), // 1e215
    PowerOfTen::new(0xeda2ee1c7064130c, 1792), // 1e214
    PowerOfTen::new(0xbe1bf1b059e9a8d6, 1789), // 1e213
    PowerOfTen::new(0x98165af37b2153de, 1786), // 1e212
    PowerOfTen::new(0xf356f7ebf83552fe, 1782), // 1e211
    PowerOfTen::new(0xc2abf989935ddbfe, 1779), // 1e210
    PowerOfTen::new(0x9bbcc7a142b17ccb, 1776), // 1e209
    PowerOfTen::new(0xf92e0c3537826145, 1772), // 1e208
    PowerOfTen::new(0xc75809c42c684dd1, 1769), // 1e207
    PowerOfTen::new(0x9f79a169bd203e41, 1766), // 1e206
    PowerOfTen::new(0xff290242c83396ce, 1762), // 1e205
    PowerOfTen::new(0xcc20ce9bd35c78a5, 1759), // 1e204
    PowerOfTen::new(0xa34d721642b06084, 1756), // 1e203
    PowerOfTen::new(0x82a45b450226b39c, 1753), // 1e202
    PowerOfTen::new(0xd106f86e69d785c7, 1749), // 1e201
    PowerOfTen::new(0xa738c6bebb12d16c, 1746), // 1e200
    PowerOfTen::new(0x85c7056562757456, 1743), // 1e199
    PowerOfTen::new(0xd60b3bd56a5586f1, 1739), // 1e198
    PowerOfTen::new(0xab3c2fddeeaad25a, 1736), // 1e197
    PowerOfTen::new(0x88fcf317f22241e2, 1733), // 1e196
    PowerOfTen::new(0xdb2e51bfe9d0696a, 1729), // 1e195
    PowerOfTen::new(0xaf58416654a6babb, 1726), // 1e194
    PowerOfTen::new(0x8c469ab843b89562, 1723), // 1e193
    PowerOfTen::new(0xe070f78d3927556a, 1719), // 1e192
    PowerOfTen::new(0xb38d92d760ec4455, 1716), // 1e191
    PowerOfTen::new(0x8fa475791a569d10, 1713), // 1e190
    PowerOfTen::new(0xe5d3ef282a242e81, 1709), // 1e189
    PowerOfTen::new(0xb7dcbf5354e9bece, 1706), // 1e188
    PowerOfTen::new(0x9316ff75dd87cbd8, 1703), // 1e187
    PowerOfTen::new(0xeb57ff22fc0c7959, 1699), // 1e186
    PowerOfTen::new(0xbc4665b596706114, 1696), // 1e185
    PowerOfTen::new(0x969eb7c47859e743, 1693), // 1e184
    PowerOfTen::new(0xf0fdf2d3f3c30b9f, 1689), // 1e183
    PowerOfTen::new(0xc0cb28a98fcf3c7f, 1686), // 1e182
    PowerOfTen::new(0x9a3c2087a63f6399, 1683), // 1e181
    PowerOfTen::new(0xf6c69a72a3989f5b, 1679), // 1e180
    PowerOfTen::new(0xc56baec21c7a1916, 1676), // 1e179
    PowerOfTen::new(0x9defbf01b061adab, 1673), // 1e178
    PowerOfTen::new(0xfcb2cb35e702af78, 1669), // 1e177
    PowerOfTen::new(0xca28a291859bbf93, 1666), // 1e176
    PowerOfTen::new(0xa1ba1ba79e1632dc, 1663), // 1e175
    PowerOfTen::new(0x8161afb94b44f57d, 1660), // 1e174
    PowerOfTen::new(0xcf02b2c21207ef2e, 1656), // 1e173
    PowerOfTen::new(0xa59bc234db398c25, 1653), // 1e172
    PowerOfTen::new(0x847c9b5d7c2e09b7, 1650), // 1e171
    PowerOfTen::new(0xd3fa922f2d1675f2, 1646), // 1e170
    PowerOfTen::new(0xa99541bf57452b28, 1643), // 1e169
    PowerOfTen::new(0x87aa9aff79042286, 1640), // 1e168
    PowerOfTen::new(0xd910f7ff28069da4, 1636), // 1e167
    PowerOfTen::new(0xada72ccc20054ae9, 1633), // 1e166
    PowerOfTen::new(0x8aec23d680043bee, 1630), // 1e165
    PowerOfTen::new(0xde469fbd99a05fe3, 1626), // 1e164
    PowerOfTen::new(0xb1d219647ae6b31c, 1623), // 1e163
    PowerOfTen::new(0x8e41ade9fbebc27d, 1620), // 1e162
    PowerOfTen::new(0xe39c49765fdf9d94, 1616), // 1e161
    PowerOfTen::new(0xb616a12b7fe617aa, 1613), // 1e160
    PowerOfTen::new(0x91abb422ccb812ee, 1610), // 1e159
    PowerOfTen::new(0xe912b9d1478ceb17, 1606), // 1e158
    PowerOfTen::new(0xba756174393d88df, 1603), // 1e157
    PowerOfTen::new(0x952ab45cfa97a0b2, 1600), // 1e156
    PowerOfTen::new(0xeeaaba2e5dbf6784, 1596), // 1e155
    PowerOfTen::new(0xbeeefb584aff8603, 1593), // 1e154
    PowerOfTen::new(0x98bf2f79d5993802, 1590), // 1e153
    PowerOfTen::new(0xf46518c2ef5b8cd1, 1586), // 1e152
    PowerOfTen::new(0xc38413cf25e2d70d, 1583), // 1e151
    PowerOfTen::new(0x9c69a97284b578d7, 1580), // 1e150
    PowerOfTen::new(0xfa42a8b73abbf48c, 1576), // 1e149
    PowerOfTen::new(0xc83553c5c8965d3d, 1573), // 1e148
    PowerOfTen::new(0xa02aa96b06deb0fd, 1570), // 1e147
    PowerOfTen::new(0x802221226be55a64, 1567), // 1e146
    PowerOfTen::new(0xcd036837130890a1, 1563), // 1e145
    PowerOfTen::new(0xa402b9c5a8d3a6e7, 1560), // 1e144
    PowerOfTen::new(0x8335616aed761f1f, 1557), // 1e143
    PowerOfTen::new(0xd1ef0244af2364ff, 1553), // 1e142
    PowerOfTen::new(0xa7f26836f282b732, 1550), // 1e141
    PowerOfTen::new(0x865b86925b9bc5c2, 1547), // 1e140
    PowerOfTen::new(0xd6f8d7509292d603, 1543), // 1e139
    PowerOfTen::new(0xabfa45da0edbde69, 1540), // 1e138
    PowerOfTen::new(0x899504ae72497eba, 1537), // 1e137
    PowerOfTen::new(0xdc21a1171d42645d, 1533), // 1e136
    PowerOfTen::new(0xb01ae745b101e9e4, 1530), // 1e135
    PowerOfTen::new(0x8ce2529e2734bb1d, 1527), // 1e134
    PowerOfTen::new(0xe16a1dc9d8545e94, 1523), // 1e133
    PowerOfTen::new(0xb454e4a179dd1877, 1520), // 1e132
    PowerOfTen::new(0x9043ea1ac7e41392, 1517), // 1e131
    PowerOfTen::new(0xe6d3102ad96cec1d, 1513), // 1e130
    PowerOfTen::new(0xb8a8d9bbe123f017, 1510), // 1e129
    PowerOfTen::new(0x93ba47c980e98cdf, 1507), // 1e128
    PowerOfTen::new(0xec5d3fa8ce427aff, 1503), // 1e127
    PowerOfTen::new(0xbd176620a501fbff, 1500), // 1e126
    PowerOfTen::new(0x9745eb4d50ce6332, 1497), // 1e125
    PowerOfTen::new(0xf209787bb47d6b84, 1493), // 1e124
    PowerOfTen::new(0xc1a12d2fc3978937, 1490), // 1e123
    PowerOfTen::new(0x9ae757596946075f, 1487), // 1e122
    PowerOfTen::new(0xf7d88bc24209a565, 1483), // 1e121
    PowerOfTen::new(0xc646d63501a1511d, 1480), // 1e120
    PowerOfTen::new(0x9e9f11c4014dda7e, 1477), // 1e119
    PowerOfTen::new(0xfdcb4fa002162a63, 1473), // 1e118
    PowerOfTen::new(0xcb090c8001ab551c, 1470), // 1e117
    PowerOfTen::new(0xa26da3999aef7749, 1467), // 1e116
    PowerOfTen::new(0x81f14fae158c5f6e, 1464), // 1e115
    PowerOfTen::new(0xcfe87f7cef46ff16, 1460), // 1e114
    PowerOfTen::new(0xa6539930bf6bff45, 1457), // 1e113
    PowerOfTen::new(0x850fadc09923329e, 1454), // 1e112
    PowerOfTen::new(0xd4e5e2cdc1d1ea96, 1450), // 1e111
    PowerOfTen::new(0xaa51823e34a7eede, 1447), // 1e110
    PowerOfTen::new(0x884134fe908658b2, 1444), // 1e109
    PowerOfTen::new(0xda01ee641a708de9, 1440), // 1e108
    PowerOfTen::new(0xae67f1e9aec07187, 1437), // 1e107
    PowerOfTen::new(0x8b865b215899f46c, 1434), // 1e106
    PowerOfTen::new(0xdf3d5e9bc0f653e1, 1430), // 1e105
    PowerOfTen::new(0xb2977ee300c50fe7, 1427), // 1e104
    PowerOfTen::new(0x8edf98b59a373fec, 1424), // 1e103
    PowerOfTen::new(0xe498f455c38b997a, 1420), // 1e102
    PowerOfTen::new(0xb6e0c377cfa2e12e, 1417), // 1e101
    PowerOfTen::new(0x924d692ca61be758, 1414), // 1e100
    PowerOfTen::new(0xea1575143cf97226, 1410), // 1e99
    PowerOfTen::new(0xbb445da9ca61281f, 1407), // 1e98
    PowerOfTen::new(0x95d04aee3b80ece5, 1404), // 1e97
    PowerOfTen::new(0xefb3ab16c59b14a2, 1400), // 1e96
    PowerOfTen::new(0xbfc2ef456ae276e8, 1397), // 1e95
    PowerOfTen::new(0x9968bf6abbe85f20, 1394), // 1e94
    PowerOfTen::new(0xf5746577930d6500, 1390), // 1e93
    PowerOfTen::new(0xc45d1df942711d9a, 1387), // 1e92
    PowerOfTen::new(0x9d174b2dcec0e47b, 1384), // 1e91
    PowerOfTen::new(0xfb5878494ace3a5f, 1380), // 1e90
    PowerOfTen::new(0xc913936dd571c84c, 1377), // 1e89
    PowerOfTen::new(0xa0dc75f1778e39d6, 1374), // 1e88
    PowerOfTen::new(0x80b05e5ac60b6178, 1371), // 1e87
    PowerOfTen::new(0xcde6fd5e09abcf26, 1367), // 1e86
    PowerOfTen::new(0xa4b8cab1a1563f52, 1364), // 1e85
    PowerOfTen::new(0x83c7088e1aab65db, 1361), // 1e84
    PowerOfTen::new(0xd2d80db02aabd62b, 1357), // 1e83
    PowerOfTen::new(0xa8acd7c0222311bc, 1354), // 1e82
    PowerOfTen::new(0x86f0ac99b4e8dafd, 1351), // 1e81
    PowerOfTen::new(0xd7e77a8f87daf7fb, 1347), // 1e80
    PowerOfTen::new(0xacb92ed9397bf996, 1344), // 1e79
    PowerOfTen::new(0x8a2dbf142dfcc7ab, 1341), // 1e78
    PowerOfTen::new(0xdd15fe86affad912, 1337), // 1e77
    PowerOfTen::new(0xb0de65388cc8ada8, 1334), // 1e76
    PowerOfTen::new(0x8d7eb76070a08aec, 1331), // 1e75
    PowerOfTen::new(0xe264589a4dcdab14, 1327), // 1e74
    PowerOfTen::new(0xb51d13aea4a488dd, 1324), // 1e73
    PowerOfTen::new(0x90e40fbeea1d3a4a, 1321), // 1e72
    PowerOfTen::new(0xe7d34c64a9c85d44, 1317), // 1e71
    PowerOfTen::new(0xb975d6b6ee39e436, 1314), // 1e70
    PowerOfTen::new(0x945e455f24fb1cf8, 1311), // 1e69
    PowerOfTen::new(0xed63a231d4c4fb27, 1307), // 1e68
    PowerOfTen::new(0xbde94e8e43d0c8ec, 1304), // 1e67
    PowerOfTen::new(0x97edd871cfda3a56, 1301), // 1e66
    PowerOfTen::new(0xf316271c7fc3908a, 1297), // 1e65
    PowerOfTen::new(0xc2781f49ffcfa6d5, 1294), // 1e64
    PowerOfTen::new(0x9b934c3b330c8577, 1291), // 1e63
    PowerOfTen::new(0xf8ebad2b84e0d58b, 1287), // 1e62
    PowerOfTen::new(0xc722f0ef9d80aad6, 1284), // 1e61
    PowerOfTen::new(0x9f4f2726179a2245, 1281), // 1e60
    PowerOfTen::new(0xfee50b7025c36a08, 1277), // 1e59
    PowerOfTen::new(0xcbea6f8ceb02bb39, 1274), // 1e58
    PowerOfTen::new(0xa321f2d7226895c7, 1271), // 1e57
    PowerOfTen::new(0x82818f1281ed449f, 1268), // 1e56
    PowerOfTen::new(0xd0cf4b50cfe20765, 1264), // 1e55
    PowerOfTen::new(0xa70c3c40a64e6c51, 1261), // 1e54
    PowerOfTen::new(0x85a36366eb71f041, 1258), // 1e53
    PowerOfTen::new(0xd5d238a4abe98068, 1254), // 1e52
    PowerOfTen::new(0xab0e93b6efee0053, 1251), // 1e51
    PowerOfTen::new(0x88d8762bf324cd0f, 1248), // 1e50
    PowerOfTen::new(0xdaf3f04651d47b4c, 1244), // 1e49
    PowerOfTen::new(0xaf298d050e4395d6, 1241), // 1e48
    PowerOfTen::new(0x8c213d9da502de45, 1238), // 1e47
    PowerOfTen::new(0xe0352f62a19e306e, 1234), // 1e46
    PowerOfTen::new(0xb35dbf821ae4f38b, 1231), // 1e45
    PowerOfTen::new(0x8f7e32ce7bea5c6f, 1228), // 1e44
    PowerOfTen::new(0xe596b7b0c643c719, 1224), // 1e43
    PowerOfTen::new(0xb7abc627050305ad, 1221), // 1e42
    PowerOfTen::new(0x92efd1b8d0cf37be, 1218), // 1e41
    PowerOfTen::new(0xeb194f8e1ae525fd, 1214), // 1e40
    PowerOfTen::new(0xbc143fa4e250eb31, 1211), // 1e39
    PowerOfTen::new(0x96769950b50d88f4, 1208), // 1e38
    PowerOfTen::new(0xf0bdc21abb48db20, 1204), // 1e37
    PowerOfTen::new(0xc097ce7bc90715b3, 1201), // 1e36
    PowerOfTen::new(0x9a130b963a6c115c, 1198), // 1e35
    PowerOfTen::new(0xf684df56c3e01bc6, 1194), // 1e34
    PowerOfTen::new(0xc5371912364ce305, 1191), // 1e33
    PowerOfTen::new(0x9dc5ada82b70b59d, 1188), // 1e32
    PowerOfTen::new(0xfc6f7c4045812296, 1184), // 1e31
    PowerOfTen::new(0xc9f2c9cd04674ede, 1181), // 1e30
    PowerOfTen::new(0xa18f07d736b90be5, 1178), // 1e29
    PowerOfTen::new(0x813f3978f8940984, 1175), // 1e28
    PowerOfTen::new(0xcecb8f27f4200f3a, 1171), // 1e27
    PowerOfTen::new(0xa56fa5b99019a5c8, 1168), // 1e26
    PowerOfTen::new(0x84595161401484a0, 1165), // 1e25
    PowerOfTen::new(0xd3c21bcecceda100, 1161), // 1e24
    PowerOfTen::new(0xa968163f0a57b400, 1158), // 1e23
    PowerOfTen::new(0x878678326eac9000, 1155), // 1e22
    PowerOfTen::new(0xd8d726b7177a8000, 1151), // 1e21
    PowerOfTen::new(0xad78ebc5ac620000, 1148), // 1e20
    PowerOfTen::new(0x8ac7230489e80000, 1145), // 1e19
    PowerOfTen::new(0xde0b6b3a76400000, 1141), // 1e18
    PowerOfTen::new(0xb1a2bc2ec5000000, 1138), // 1e17
    PowerOfTen::new(0x8e1bc9bf04000000, 1135), // 1e16
    PowerOfTen::new(0xe35fa931a0000000, 1131), // 1e15
    PowerOfTen::new(0xb5e620f480000000, 1128), // 1e14
    PowerOfTen::new(0x9184e72a00000000, 1125), // 1e13
    PowerOfTen::new(0xe8d4a51000000000, 1121), // 1e12
    PowerOfTen::new(0xba43b74000000000, 1118), // 1e11
    PowerOfTen::new(0x9502f90000000000, 1115), // 1e10
    PowerOfTen::new(0xee6b280000000000, 1111), // 1e9
    PowerOfTen::new(0xbebc200000000000, 1108), // 1e8
    PowerOfTen::new(0x9896800000000000, 1105), // 1e7
    PowerOfTen::new(0xf424000000000000, 1101), // 1e6
    PowerOfTen::new(0xc350000000000000, 1098), // 1e5
    PowerOfTen::new(0x9c40000000000000, 1095), // 1e4
    PowerOfTen::new(0xfa00000000000000, 1091), // 1e3
    PowerOfTen::new(0xc800000000000000, 1088), // 1e2
    PowerOfTen::new(0xa000000000000000, 1085), // 1e1
    PowerOfTen::new(0x8000000000000000, 1082), // 1e0
    PowerOfTen::new(0xcccccccccccccccc, 1078), // 1e-1
    PowerOfTen::new(0xa3d70a3d70a3d70a, 1075), // 1e-2
    PowerOfTen::new(0x83126e978d4fdf3b, 1072), // 1e-3
    PowerOfTen::new(0xd1b71758e219652b, 1068), // 1e-4
    PowerOfTen::new(0xa7c5ac471b478423, 1065), // 1e-5
    PowerOfTen::new(0x8637bd05af6c69b5, 1062), // 1e-6
    PowerOfTen::new(0xd6bf94d5e57a42bc, 1058), // 1e-7
    PowerOfTen::new(0xabcc77118461cefc, 1055), // 1e-8
    PowerOfTen::new(0x89705f4136b4a597, 1052), // 1e-9
    PowerOfTen::new(0xdbe6fecebdedd5be, 1048), // 1e-10
    PowerOfTen::new(0xafebff0bcb24aafe, 1045), // 1e-11
    PowerOfTen::new(0x8cbccc096f5088cb, 1042), // 1e-12
    PowerOfTen::new(0xe12e13424bb40e13, 1038), // 1e-13
    PowerOfTen::new(0xb424dc35095cd80f, 1035), // 1e-14
    PowerOfTen::new(0x901d7cf73ab0acd9, 1032), // 1e-15
    PowerOfTen::new(0xe69594bec44de15b, 1028), // 1e-16
    PowerOfTen::new(0xb877aa3236a4b449, 1025), // 1e-17
    PowerOfTen::new(0x9392ee8e921d5d07, 1022), // 1e-18
    PowerOfTen::new(0xec1e4a7db69561a5, 1018), // 1e-19
    PowerOfTen::new(0xbce5086492111aea, 1015), // 1e-20
    PowerOfTen::new(0x971da05074da7bee, 1012), // 1e-21
    PowerOfTen::new(0xf1c90080baf72cb1, 1008), // 1e-22
    PowerOfTen::new(0xc16d9a0095928a27, 1005), // 1e-23
    PowerOfTen::new(0x9abe14cd44753b52, 1002), // 1e-24
    PowerOfTen::new(0xf79687aed3eec551, 998), // 1e-25
    PowerOfTen::new(0xc612062576589dda, 995), // 1e-26
    PowerOfTen::new(0x9e74d1b791e07e48, 992), // 1e-27
    PowerOfTen::new(0xfd87b5f28300ca0d, 988), // 1e-28
    PowerOfTen::new(0xcad2f7f5359a3b3e, 985), // 1e-29
    PowerOfTen::new(0xa2425ff75e14fc31, 982), // 1e-30
    PowerOfTen::new(0x81ceb32c4b43fcf4, 979), // 1e-31
    PowerOfTen::new(0xcfb11ead453994ba, 975), // 1e-32
    PowerOfTen::new(0xa6274bbdd0fadd61, 972), // 1e-33
    PowerOfTen::new(0x84ec3c97da624ab4, 969), // 1e-34
    PowerOfTen::new(0xd4ad2dbfc3d07787, 965), // 1e-35
    PowerOfTen::new(0xaa242499697392d2, 962), // 1e-36
    PowerOfTen::new(0x881cea14545c7575, 959), // 1e-37
    PowerOfTen::new(0xd9c7dced53c72255, 955), // 1e-38
    PowerOfTen::new(0xae397d8aa96c1b77, 952), // 1e-39
    PowerOfTen::new(0x8b61313bbabce2c6, 949), // 1e-40
    PowerOfTen::new(0xdf01e85f912e37a3, 945), // 1e-41
    PowerOfTen::new(0xb267ed1940f1c61c, 942), // 1e-42
    PowerOfTen::new(0x8eb98a7a9a5b04e3, 939), // 1e-43
    PowerOfTen::new(0xe45c10c42a2b3b05, 935), // 1e-44
    PowerOfTen::new(0xb6b00d69bb55c8d1, 932), // 1e-45
    PowerOfTen::new(0x9226712162ab070d, 929), // 1e-46
    PowerOfTen::new(0xe9d71b689dde71af, 925), // 1e-47
    PowerOfTen::new(0xbb127c53b17ec159, 922), // 1e-48
    PowerOfTen::new(0x95a8637627989aad, 919), // 1e-49
    PowerOfTen::new(0xef73d256a5c0f77c, 915), // 1e-50
    PowerOfTen::new(0xbf8fdb78849a5f96, 912), // 1e-51
    PowerOfTen::new(0x993fe2c6d07b7fab, 909), // 1e-52
    PowerOfTen::new(0xf53304714d9265df, 905), // 1e-53
    PowerOfTen::new(0xc428d05aa4751e4c, 902), // 1e-54
    PowerOfTen::new(0x9ced737bb6c4183d, 899), // 1e-55
    PowerOfTen::new(0xfb158592be068d2e, 895), // 1e-56
    PowerOfTen::new(0xc8de047564d20a8b, 892), // 1e-57
    PowerOfTen::new(0xa0b19d2ab70e6ed6, 889), // 1e-58
    PowerOfTen::new(0x808e17555f3ebf11, 886), // 1e-59
    PowerOfTen::new(0xcdb02555653131b6, 882), // 1e-60
    PowerOfTen::new(0xa48ceaaab75a8e2b, 879), // 1e-61
    PowerOfTen::new(0x83a3eeeef9153e89, 876), // 1e-62
    PowerOfTen::new(0xd29fe4b18e88640e, 872), // 1e-63
    PowerOfTen::new(0xa87fea27a539e9a5, 869), // 1e-64
    PowerOfTen::new(0x86ccbb52ea94baea, 866), // 1e-65
    PowerOfTen::new(0xd7adf884aa879177, 862), // 1e-66
    PowerOfTen::new(0xac8b2d36eed2dac5, 859), // 1e-67
    PowerOfTen::new(0x8a08f0f8bf0f156b, 856), // 1e-68
    PowerOfTen::new(0xdcdb1b2798182244, 852), // 1e-69
    PowerOfTen::new(0xb0af48ec79ace837, 849), // 1e-70
    PowerOfTen::new(0x8d590723948a535f, 846), // 1e-71
    PowerOfTen::new(0xe2280b6c20dd5232, 842), // 1e-72
    PowerOfTen::new(0xb4ecd5f01a4aa828, 839), // 1e-73
    PowerOfTen::new(0x90bd77f3483bb9b9, 836), // 1e-74
    PowerOfTen::new(0xe7958cb87392c2c2, 832), // 1e-75
    PowerOfTen::new(0xb94470938fa89bce, 829), // 1e-76
    PowerOfTen::new(0x9436c0760c86e30b, 826), // 1e-77
    PowerOfTen::new(0xed246723473e3813, 822), // 1e-78
    PowerOfTen::new(0xbdb6b8e905cb600f, 819), // 1e-79
    PowerOfTen::new(0x97c560ba6b0919a5, 816), // 1e-80
    PowerOfTen::new(0xf2d56790ab41c2a2, 812), // 1e-81
    PowerOfTen::new(0xc24452da229b021b, 809), // 1e-82
    PowerOfTen::new(0x9b69dbe1b548ce7c, 806), // 1e-83
    PowerOfTen::new(0xf8a95fcf88747d94, 802), // 1e-84
    PowerOfTen::new(0xc6ede63fa05d3143, 799), // 1e-85
    PowerOfTen::new(0x9f24b832e6b0f436, 796), // 1e-86
    PowerOfTen::new(0xfea126b7d78186bc, 792), // 1e-87
    PowerOfTen::new(0xcbb41ef979346bca, 789), // 1e-88
    PowerOfTen::new(0xa2f67f2dfa90563b, 786), // 1e-89
    PowerOfTen::new(0x825ecc24c873782f, 783), // 1e-90
    PowerOfTen::new(0xd097ad07a71f26b2, 779), // 1e-91
    PowerOfTen::new(0xa6dfbd9fb8e5b88e, 776), // 1e-92
    PowerOfTen::new(0x857fcae62d8493a5, 773), // 1e-93
    PowerOfTen::new(0xd59944a37c0752a2, 769), // 1e-94
    PowerOfTen::new(0xaae103b5fcd2a881, 766), // 1e-95
    PowerOfTen::new(0x88b402f7fd75539b, 763), // 1e-96
    PowerOfTen::new(0xdab99e59958885c4, 759), // 1e-97
    PowerOfTen::new(0xaefae51477a06b03, 756), // 1e-98
    PowerOfTen::new(0x8bfbea76c619ef36, 753), // 1e-99
    PowerOfTen::new(0xdff9772470297ebd, 749), // 1e-100
    PowerOfTen::new(0xb32df8e9f3546564, 746), // 1e-101
    PowerOfTen::new(0x8f57fa54c2a9eab6, 743), // 1e-102
    PowerOfTen::new(0xe55990879ddcaabd, 739), // 1e-103
    PowerOfTen::new(0xb77ada0617e3bbcb, 736), // 1e-104
    PowerOfTen::new(0x92c8ae6b464fc96f, 733), // 1e-105
    PowerOfTen::new(0xeadab0aba3b2dbe5, 729), // 1e-106
    PowerOfTen::new(0xbbe226efb628afea, 726), // 1e-107
    PowerOfTen::new(0x964e858c91ba2655, 723), // 1e-108
    PowerOfTen::new(0xf07da27a82c37088, 719), // 1e-109
    PowerOfTen::new(0xc06481fb9bcf8d39, 716), // 1e-110
    PowerOfTen::new(0x99ea0196163fa42e, 713), // 1e-111
    PowerOfTen::new(0xf64335bcf065d37d, 709), // 1e-112
    PowerOfTen::new(0xc5029163f384a931, 706), // 1e-113
    PowerOfTen::new(0x9d9ba7832936edc0, 703), // 1e-114
    PowerOfTen::new(0xfc2c3f3841f17c67, 699), // 1e-115
    PowerOfTen::new(0xc9bcff6034c13052, 696), // 1e-116
    PowerOfTen::new(0xa163ff802a3426a8, 693), // 1e-117
    PowerOfTen::new(0x811ccc668829b887, 690), // 1e-118
    PowerOfTen::new(0xce947a3da6a9273e, 686), // 1e-119
    PowerOfTen::new(0xa54394fe1eedb8fe, 683), // 1e-120
    PowerOfTen::new(0x843610cb4bf160cb, 680), // 1e-121
    PowerOfTen::new(0xd389b47879823479, 676), // 1e-122
    PowerOfTen::new(0xa93af6c6c79b5d2d, 673), // 1e-123
    PowerOfTen::new(0x87625f056c7c4a8b, 670), // 1e-124
    PowerOfTen::new(0xd89d64d57a607744, 666), // 1e-125
    PowerOfTen::new(0xad4ab7112eb3929d, 663), // 1e-126
    PowerOfTen::new(0x8aa22c0dbef60ee4, 660), // 1e-127
    PowerOfTen::new(0xddd0467c64bce4a0, 656), // 1e-128
    PowerOfTen::new(0xb1736b96b6fd83b3, 653), // 1e-129
    PowerOfTen::new(0x8df5efabc5979c8f, 650), // 1e-130
    PowerOfTen::new(0xe3231912d5bf60e6, 646), // 1e-131
    PowerOfTen::new(0xb5b5ada8aaff80b8, 643), // 1e-132
    PowerOfTen::new(0x915e2486ef32cd60, 640), // 1e-133
    PowerOfTen::new(0xe896a0d7e51e1566, 636), // 1e-134
    PowerOfTen::new(0xba121a4650e4ddeb, 633), // 1e-135
    PowerOfTen::new(0x94db483840b717ef, 630), // 1e-136
    PowerOfTen::new(0xee2ba6c0678b597f, 626), // 1e-137
    PowerOfTen::new(0xbe89523386091465, 623), // 1e-138
    PowerOfTen::new(0x986ddb5c6b3a76b7, 620), // 1e-139
    PowerOfTen::new(0xf3e2f893dec3f126, 616), // 1e-140
    PowerOfTen::new(0xc31bfa0fe5698db8, 613), // 1e-141
    PowerOfTen::new(0x9c1661a651213e2d, 610), // 1e-142
    PowerOfTen::new(0xf9bd690a1b68637b, 606), // 1e-143
    PowerOfTen::new(0xc7caba6e7c5382c8, 603), // 1e-144
    PowerOfTen::new(0x9fd561f1fd0f9bd3, 600), // 1e-145
    PowerOfTen::new(0xffbbcfe994e5c61f, 596), // 1e-146
    PowerOfTen::new(0xcc963fee10b7d1b3, 593), // 1e-147
    PowerOfTen::new(0xa3ab66580d5fdaf5, 590), // 1e-148
    PowerOfTen::new(0x82ef85133de648c4, 587), // 1e-149
    PowerOfTen::new(0xd17f3b51fca3a7a0, 583), // 1e-150
    PowerOfTen::new(0xa798fc4196e952e7, 580), // 1e-151
    PowerOfTen::new(0x8613fd0145877585, 577), // 1e-152
    PowerOfTen::new(0xd686619ba27255a2, 573), // 1e-153
    PowerOfTen::new(0xab9eb47c81f5114f, 570), // 1e-154
    PowerOfTen::new(0x894bc396ce5da772, 567), // 1e-155
    PowerOfTen::new(0xdbac6c247d62a583, 563), // 1e-156
    PowerOfTen::new(0xafbd2350644eeacf, 560), // 1e-157
    PowerOfTen::new(0x8c974f7383725573, 557), // 1e-158
    PowerOfTen::new(0xe0f218b8d25088b8, 553), // 1e-159
    PowerOfTen::new(0xb3f4e093db73a093, 550), // 1e-160
    PowerOfTen::new(0x8ff71a0fe2c2e6dc, 547), // 1e-161
    PowerOfTen::new(0xe65829b3046b0afa, 543), // 1e-162
    PowerOfTen::new(0xb84687c269ef3bfb, 540), // 1e-163
    PowerOfTen::new(0x936b9fcebb25c995, 537), // 1e-164
    PowerOfTen::new(0xebdf661791d60f56, 533), // 1e-165
    PowerOfTen::new(0xbcb2b812db11a5de, 530), // 1e-166
    PowerOfTen::new(0x96f5600f15a7b7e5, 527), // 1e-167
    PowerOfTen::new(0xf18899b1bc3f8ca1, 523), // 1e-168
    PowerOfTen::new(0xc13a148e3032d6e7, 520), // 1e-169
    PowerOfTen::new(0x9a94dd3e8cf578b9, 517), // 1e-170
    PowerOfTen::new(0xf7549530e188c128, 513), // 1e-171
    PowerOfTen::new(0xc5dd44271ad3cdba, 510), // 1e-172
    PowerOfTen::new(0x9e4a9cec15763e2e, 507), // 1e-173
    PowerOfTen::new(0xfd442e4688bd304a, 503), // 1e-174
    PowerOfTen::new(0xca9cf1d206fdc03b, 500), // 1e-175
    PowerOfTen::new(0xa21727db38cb002f, 497), // 1e-176
    PowerOfTen::new(0x81ac1fe293d599bf, 494), // 1e-177
    PowerOfTen::new(0xcf79cc9db955c2cc, 490), // 1e-178
    PowerOfTen::new(0xa5fb0a17c777cf09, 487), // 1e-179
    PowerOfTen::new(0x84c8d4dfd2c63f3b, 484), // 1e-180
    PowerOfTen::new(0xd47487cc8470652b, 480), // 1e-181
    PowerOfTen::new(0xa9f6d30a038d1dbc, 477), // 1e-182
    PowerOfTen::new(0x87f8a8d4cfa417c9, 474), // 1e-183
    PowerOfTen::new(0xd98ddaee19068c76, 470), // 1e-184
    PowerOfTen::new(0xae0b158b4738705e, 467), // 1e-185
    PowerOfTen::new(0x8b3c113c38f9f37e, 464), // 1e-186
    PowerOfTen::new(0xdec681f9f4c31f31, 460), // 1e-187
    PowerOfTen::new(0xb23867fb2a35b28d, 457), // 1e-188
    PowerOfTen::new(0x8e938662882af53e, 454), // 1e-189
    PowerOfTen::new(0xe41f3d6a7377eeca, 450), // 1e-190
    PowerOfTen::new(0xb67f6455292cbf08, 447), // 1e-191
    PowerOfTen::new(0x91ff83775423cc06, 444), // 1e-192
    PowerOfTen::new(0xe998d258869facd7, 440), // 1e-193
    PowerOfTen::new(0xbae0a846d2195712, 437), // 1e-194
    PowerOfTen::new(0x9580869f0e7aac0e, 434), // 1e-195
    PowerOfTen::new(0xef340a98172aace4, 430), // 1e-196
    PowerOfTen::new(0xbf5cd54678eef0b6, 427), // 1e-197
    PowerOfTen::new(0x991711052d8bf3c5, 424), // 1e-198
    PowerOfTen::new(0xf4f1b4d515acb93b, 420), // 1e-199
    PowerOfTen::new(0xc3f490aa77bd60fc, 417), // 1e-200
    PowerOfTen::new(0x9cc3a6eec6311a63, 414), // 1e-201
    PowerOfTen::new(0xfad2a4b13d1b5d6c, 410), // 1e-202
    PowerOfTen::new(0xc8a883c0fdaf7df0, 407), // 1e-203
    PowerOfTen::new(0xa086cfcd97bf97f3, 404), // 1e-204
    PowerOfTen::new(0x806bd9714632dff6, 401), // 1e-205
    PowerOfTen::new(0xcd795be870516656, 397), // 1e-206
    PowerOfTen::new(0xa46116538d0deb78, 394), // 1e-207
    PowerOfTen::new(0x8380dea93da4bc60, 391), // 1e-208
    PowerOfTen::new(0xd267caa862a12d66, 387), // 1e-209
    PowerOfTen::new(0xa8530886b54dbdeb, 384), // 1e-210
    PowerOfTen::new(0x86a8d39ef77164bc, 381), // 1e-211
    PowerOfTen::new(0xd77485cb25823ac7, 377), // 1e-212
    PowerOfTen::new(0xac5d37d5b79b6239, 374), // 1e-213
    PowerOfTen::new(0x89e42caaf9491b60, 371), // 1e-214
    PowerOfTen::new(0xdca04777f541c567, 367), // 1e-215
    PowerOfTen::new(0xb080392cc4349dec, 364), // 1e-216
    PowerOfTen::new(0x8d3360f09cf6e4bd, 361), // 1e-217
    PowerOfTen::new(0xe1ebce4dc7f16dfb, 357), // 1e-218
    PowerOfTen::new(0xb4bca50b065abe63, 354), // 1e-219
    PowerOfTen::new(0x9096ea6f3848984f, 351), // 1e-220
    PowerOfTen::new(0xe757dd7ec07426e5, 347), // 1e-221
    PowerOfTen::new(0xb913179899f68584, 344), // 1e-222
    PowerOfTen::new(0x940f4613ae5ed136, 341), // 1e-223
    PowerOfTen::new(0xece53cec4a314ebd, 337), // 1e-224
    PowerOfTen::new(0xbd8430bd08277231, 334), // 1e-225
    PowerOfTen::new(0x979cf3ca6cec5b5a, 331), // 1e-226
    PowerOfTen::new(0xf294b943e17a2bc4, 327), // 1e-227
    PowerOfTen::new(0xc21094364dfb5636, 324), // 1e-228
    PowerOfTen::new(0x9b407691d7fc44f8, 321), // 1e-229
    PowerOfTen::new(0xf867241c8cc6d4c0, 317), // 1e-230
    PowerOfTen::new(0xc6b8e9b0709f109a, 314), // 1e-231
    PowerOfTen::new(0x9efa548d26e5a6e1, 311), // 1e-232
    PowerOfTen::new(0xfe5d54150b090b02, 307), // 1e-233
    PowerOfTen::new(0xcb7ddcdda26da268, 304), // 1e-234
    PowerOfTen::new(0xa2cb1717b52481ed, 301), // 1e-235
    PowerOfTen::new(0x823c12795db6ce57, 298), // 1e-236
    PowerOfTen::new(0xd0601d8efc57b08b, 294), // 1e-237
    PowerOfTen::new(0xa6b34ad8c9dfc06f, 291), // 1e-238
    PowerOfTen::new(0x855c3be0a17fcd26, 288), // 1e-239
    PowerOfTen::new(0xd5605fcdcf32e1d6, 284), // 1e-240
    PowerOfTen::new(0xaab37fd7d8f58178, 281), // 1e-241
    PowerOfTen::new(0x888f99797a5e012d, 278), // 1e-242
    PowerOfTen::new(0xda7f5bf590966848, 274), // 1e-243
    PowerOfTen::new(0xaecc49914078536d, 271), // 1e-244
    PowerOfTen::new(0x8bd6a141006042bd, 268), // 1e-245
    PowerOfTen::new(0xdfbdcece67006ac9, 264), // 1e-246
    PowerOfTen::new(0xb2fe3f0b8599ef07, 261), // 1e-247
    PowerOfTen::new(0x8f31cc0937ae58d2, 258), // 1e-248
    PowerOfTen::new(0xe51c79a85916f484, 254), // 1e-249
    PowerOfTen::new(0xb749faed14125d36, 251), // 1e-250
    PowerOfTen::new(0x92a1958a7675175f, 248), // 1e-251
    PowerOfTen::new(0xea9c227723ee8bcb, 244), // 1e-252
    PowerOfTen::new(0xbbb01b9283253ca2, 241), // 1e-253
    PowerOfTen::new(0x96267c7535b763b5, 238), // 1e-254
    PowerOfTen::new(0xf03d93eebc589f88, 234), // 1e-255
    PowerOfTen::new(0xc0314325637a1939, 231), // 1e-256
    PowerOfTen::new(0x99c102844f94e0fb, 228), // 1e-257
    PowerOfTen::new(0xf6019da07f549b2b, 224), // 1e-258
    PowerOfTen::new(0xc4ce17b399107c22, 221), // 1e-259
    PowerOfTen::new(0x9d71ac8fada6c9b5, 218), // 1e-260
    PowerOfTen::new(0xfbe9141915d7a922, 214), // 1e-261
    PowerOfTen::new(0xc987434744ac874e, 211), // 1e-262
    PowerOfTen::new(0xa139029f6a239f72, 208), // 1e-263
    PowerOfTen::new(0x80fa687f881c7f8e, 205), // 1e-264
    PowerOfTen::new(0xce5d73ff402d98e3, 201), // 1e-265
    PowerOfTen::new(0xa5178fff668ae0b6, 198), // 1e-266
    PowerOfTen::new(0x8412d9991ed58091, 195), // 1e-267
    PowerOfTen::new(0xd3515c2831559a83, 191), // 1e-268
    PowerOfTen::new(0xa90de3535aaae202, 188), // 1e-269
    PowerOfTen::new(0x873e4f75e2224e68, 185), // 1e-270
    PowerOfTen::new(0xd863b256369d4a40, 181), // 1e-271
    PowerOfTen::new(0xad1c8eab5ee43b66, 178), // 1e-272
    PowerOfTen::new(0x8a7d3eef7f1cfc52, 175), // 1e-273
    PowerOfTen::new(0xdd95317f31c7fa1d, 171), // 1e-274
    PowerOfTen::new(0xb1442798f49ffb4a, 168), // 1e-275
    PowerOfTen::new(0x8dd01fad907ffc3b, 165), // 1e-276
    PowerOfTen::new(0xe2e69915b3fff9f9, 161), // 1e-277
    PowerOfTen::new(0xb58547448ffffb2d, 158), // 1e-278
    PowerOfTen::new(0x91376c36d99995be, 155), // 1e-279
    PowerOfTen::new(0xe858ad248f5c22c9, 151), // 1e-280
    PowerOfTen::new(0xb9e08a83a5e34f07, 148), // 1e-281
    PowerOfTen::new(0x94b3a202eb1c3f39, 145), // 1e-282
    PowerOfTen::new(0xedec366b11c6cb8f, 141), // 1e-283
    PowerOfTen::new(0xbe5691ef416bd60c, 138), // 1e-284
    PowerOfTen::new(0x9845418c345644d6, 135), // 1e-285
    PowerOfTen::new(0xf3a20279ed56d48a, 131), // 1e-286
    PowerOfTen::new(0xc2e801fb244576d5, 128), // 1e-287
    PowerOfTen::new(0x9becce62836ac577, 125), // 1e-288
    PowerOfTen::new(0xf97ae3d0d2446f25, 121), // 1e-289
    PowerOfTen::new(0xc795830d75038c1d, 118), // 1e-290
    PowerOfTen::new(0x9faacf3df73609b1, 115), // 1e-291
    PowerOfTen::new(0xff77b1fcbebcdc4f, 111), // 1e-292
    PowerOfTen::new(0xcc5fc196fefd7d0c, 108), // 1e-293
    PowerOfTen::new(0xa37fce126597973c, 105), // 1e-294
    PowerOfTen::new(0x82cca4db847945ca, 102), // 1e-295
    PowerOfTen::new(0xd1476e2c07286faa, 98), // 1e-296
    PowerOfTen::new(0xa76c582338ed2621, 95), // 1e-297
    PowerOfTen::new(0x85f0468293f0eb4e, 92), // 1e-298
    PowerOfTen::new(0xd64d3d9db981787d, 88), // 1e-299
    PowerOfTen::new(0xab70fe17c79ac6ca, 85), // 1e-300
    PowerOfTen::new(0x892731ac9faf056e, 82), // 1e-301
    PowerOfTen::new(0xdb71e91432b1a24a, 78), // 1e-302
    PowerOfTen::new(0xaf8e5410288e1b6f, 75), // 1e-303
    PowerOfTen::new(0x8c71dcd9ba0b4925, 72), // 1e-304
    PowerOfTen::new(0xe0b62e2929aba83c, 68), // 1e-305
    PowerOfTen::new(0xb3c4f1ba87bc8696, 65), // 1e-306
    PowerOfTen::new(0x8fd0c16206306bab, 62), // 1e-307
    PowerOfTen::new(0xe61acf033d1a45df, 58), // 1e-308
    PowerOfTen::new(0xb8157268fdae9e4c, 55), // 1e-309
    PowerOfTen::new(0x93445b8731587ea3, 52), // 1e-310
    PowerOfTen::new(0xeba09271e88d976b, 48), // 1e-311
    PowerOfTen::new(0xbc807527ed3e12bc, 45), // 1e-312
    PowerOfTen::new(0x96cd2a865764dbca, 42), // 1e-313
    PowerOfTen::new(0xf148440a256e2c76, 38), // 1e-314
    PowerOfTen::new(0xc1069cd4eabe89f8, 35), // 1e-315
    PowerOfTen::new(0x9a6bb0aa55653b2d, 32), // 1e-316
    PowerOfTen::new(0xf712b443bbd52b7b, 28), // 1e-317
    PowerOfTen::new(0xc5a890362fddbc62, 25), // 1e-318
    PowerOfTen::new(0x9e20735e8cb16382, 22), // 1e-319
    PowerOfTen::new(0xfd00b897478238d0, 18), // 1e-320
    PowerOfTen::new(0xca66fa129f9b60a6, 15), // 1e-321
    PowerOfTen::new(0xa1ebfb4219491a1f, 12), // 1e-322
    PowerOfTen::new(0x818995ce7aa0e1b2, 9), // 1e-323
    PowerOfTen::new(0xcf42894a5dce35ea, 5), // 1e-324
    PowerOfTen::new(0xa5ced43b7e3e9188, 2), // 1e-325
    PowerOfTen::new(0x84a57695fe98746d, -1), // 1e-326
    PowerOfTen::new(0xd43bf0effdc0ba48, -5), // 1e-327
    PowerOfTen::new(0xa9c98d8ccb009506, -8), // 1e-328
    PowerOfTen::new(0x87d4713d6f33aa6b, -11), // 1e-329
    PowerOfTen::new(0xd953e8624b85dd78, -15), // 1e-330
    PowerOfTen::new(0xaddcb9e83c6b1793, -18), // 1e-331
    PowerOfTen::new(0x8b16fb203055ac76, -21), // 1e-332
    PowerOfTen::new(0xde8b2b66b3bc4723, -25), // 1e-333
    PowerOfTen::new(0xb208ef855c969f4f, -28), // 1e-334
    PowerOfTen::new(0x8e6d8c6ab0787f72, -31), // 1e-335
    PowerOfTen::new(0xe3e27a444d8d98b7, -35), // 1e-336
    PowerOfTen::new(0xb64ec836a47146f9, -38), // 1e-337
    PowerOfTen::new(0x91d8a02bb6c10594, -41), // 1e-338
    PowerOfTen::new(0xe95a99df8ace6f53, -45), // 1e-339
    PowerOfTen::new(0xbaaee17fa23ebf76, -48), // 1e-340
    PowerOfTen::new(0x9558b4661b6565f8, -51), // 1e-341
    PowerOfTen::new(0xeef453d6923bd65a, -55), // 1e-342
    PowerOfTen::new(0xbf29dcaba82fdeae, -58), // 1e-343
    PowerOfTen::new(0x98ee4a22ecf3188b, -61), // 1e-344
    PowerOfTen::new(0xf4b0769e47eb5a78, -65), // 1e-345
    PowerOfTen::new(0xc3c05ee50655e1fa, -68), // 1e-346
    PowerOfTen::new(0x9c99e58405118195, -71), // 1e-347
];

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use rug::Integer;

    #[test]
    fn test_entries_are_truncated_powers_of_ten() {
        for (i, entry) in POWERS_OF_TEN.iter().enumerate() {
            let d = PowerOfTen::decimal_exponent(i);
            let shift = EXPONENT_SCALE - entry.exponent;
            let pow = Integer::from(Integer::u_pow_u(10, d.unsigned_abs()));

            let exact = if d >= 0 {
                if shift >= 0 {
                    pow << shift as u32
                } else {
                    pow >> shift.unsigned_abs()
                }
            } else {
                assert!(shift >= 0);
                (Integer::from(1) << shift as u32) / pow
            };

            assert!(all(entry.mantissa >> 63 == 1, exact.to_u64() == Some(entry.mantissa)));
        }
    }

    #[test]
    fn test_exponents_step_by_log2_10() {
        for pair in POWERS_OF_TEN.windows(2) {
            let step = pair[0].exponent - pair[1].exponent;
            assert!((3..=4).contains(&step));
        }
    }

    #[test]
    fn test_one() {
        let i = index(0);
        assert!(i == 312);
        let one = get(i as usize).unwrap();
        assert!(all(one.mantissa == 1u64 << 63, one.exponent == EXPONENT_SCALE - 63));
    }

    #[test]
    fn test_bounds() {
        assert!(all(
            index(OFFSET) == 0,
            index(OFFSET - LEN as i32 + 1) == LEN as isize - 1,
            index(OFFSET + 1) == -1,
        ));
        assert!(get(0).is_some());
        assert!(get(LEN - 1).is_some());
        assert!(get(LEN).is_none());
        assert!(PowerOfTen::decimal_exponent(LEN - 1) == -347);
    }
}
