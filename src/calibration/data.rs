//! 탱크별 교정 자료.
//!
//! 높이↔용량 표는 성적서 측정값이 아니다. 반구형 경판을 가진 수평 원통의
//! 기하학적 체적을 50 mm 간격으로 계산한 뒤 최대 액위에서 공칭 용량이 되도록
//! 비례 환산한 값이며, 성적서 용량표를 확보하면 그대로 교체한다.
//! 충전률 기준점은 성적서의 기준 레벨이다.

use super::{CalibrationPoint, PercentagePoint};

/// Tank 01 높이(mm) → 용량(L).
pub const TANK1_HEIGHT_CAPACITY: &[CalibrationPoint] = &[
    cp(0.0, 0.0), cp(50.0, 334.0), cp(100.0, 952.0), cp(150.0, 1754.0),
    cp(200.0, 2706.0), cp(250.0, 3785.0), cp(300.0, 4975.0), cp(350.0, 6265.0),
    cp(400.0, 7646.0), cp(450.0, 9108.0), cp(500.0, 10646.0), cp(550.0, 12254.0),
    cp(600.0, 13924.0), cp(650.0, 15654.0), cp(700.0, 17438.0), cp(750.0, 19271.0),
    cp(800.0, 21150.0), cp(850.0, 23071.0), cp(900.0, 25031.0), cp(950.0, 27025.0),
    cp(1000.0, 29050.0), cp(1050.0, 31103.0), cp(1100.0, 33182.0), cp(1150.0, 35282.0),
    cp(1200.0, 37401.0), cp(1250.0, 39536.0), cp(1300.0, 41683.0), cp(1350.0, 43841.0),
    cp(1400.0, 46006.0), cp(1450.0, 48175.0), cp(1500.0, 50346.0), cp(1550.0, 52516.0),
    cp(1600.0, 54681.0), cp(1650.0, 56839.0), cp(1700.0, 58988.0), cp(1750.0, 61124.0),
    cp(1800.0, 63244.0), cp(1850.0, 65346.0), cp(1900.0, 67426.0), cp(1950.0, 69482.0),
    cp(2000.0, 71509.0), cp(2050.0, 73506.0), cp(2100.0, 75468.0), cp(2150.0, 77392.0),
    cp(2200.0, 79275.0), cp(2250.0, 81112.0), cp(2300.0, 82900.0), cp(2350.0, 84634.0),
    cp(2400.0, 86310.0), cp(2450.0, 87923.0), cp(2500.0, 89466.0), cp(2550.0, 90935.0),
    cp(2600.0, 92323.0), cp(2650.0, 93620.0), cp(2700.0, 94819.0), cp(2750.0, 95907.0),
    cp(2800.0, 96870.0), cp(2850.0, 97685.0), cp(2900.0, 98320.0), cp(2950.0, 98688.0),
    cp(2954.0, 98695.0),
];

/// Tank 02 높이(mm) → 용량(L).
pub const TANK2_HEIGHT_CAPACITY: &[CalibrationPoint] = &[
    cp(0.0, 0.0), cp(50.0, 333.0), cp(100.0, 948.0), cp(150.0, 1748.0),
    cp(200.0, 2697.0), cp(250.0, 3772.0), cp(300.0, 4959.0), cp(350.0, 6245.0),
    cp(400.0, 7621.0), cp(450.0, 9079.0), cp(500.0, 10612.0), cp(550.0, 12215.0),
    cp(600.0, 13880.0), cp(650.0, 15605.0), cp(700.0, 17383.0), cp(750.0, 19212.0),
    cp(800.0, 21085.0), cp(850.0, 23001.0), cp(900.0, 24955.0), cp(950.0, 26943.0),
    cp(1000.0, 28963.0), cp(1050.0, 31011.0), cp(1100.0, 33084.0), cp(1150.0, 35178.0),
    cp(1200.0, 37292.0), cp(1250.0, 39421.0), cp(1300.0, 41564.0), cp(1350.0, 43717.0),
    cp(1400.0, 45877.0), cp(1450.0, 48041.0), cp(1500.0, 50208.0), cp(1550.0, 52373.0),
    cp(1600.0, 54534.0), cp(1650.0, 56688.0), cp(1700.0, 58833.0), cp(1750.0, 60965.0),
    cp(1800.0, 63082.0), cp(1850.0, 65181.0), cp(1900.0, 67259.0), cp(1950.0, 69312.0),
    cp(2000.0, 71337.0), cp(2050.0, 73332.0), cp(2100.0, 75293.0), cp(2150.0, 77217.0),
    cp(2200.0, 79099.0), cp(2250.0, 80937.0), cp(2300.0, 82726.0), cp(2350.0, 84461.0),
    cp(2400.0, 86139.0), cp(2450.0, 87755.0), cp(2500.0, 89302.0), cp(2550.0, 90776.0),
    cp(2600.0, 92169.0), cp(2650.0, 93474.0), cp(2700.0, 94681.0), cp(2750.0, 95780.0),
    cp(2800.0, 96755.0), cp(2850.0, 97587.0), cp(2900.0, 98243.0), cp(2950.0, 98653.0),
    cp(2960.0, 98682.0),
];

/// Tank 01 충전률(%) → 액위(mm) 기준점.
pub const TANK1_PERCENTAGE_HEIGHT: &[PercentagePoint] = &[
    pp(0.0, 0.0),
    pp(5.0, 154.45),
    pp(10.0, 308.9),
    pp(85.0, 2625.65),
    pp(90.0, 2780.1),
    pp(95.0, 2934.55),
    pp(100.0, 2954.0),
];

/// Tank 02 충전률(%) → 액위(mm) 기준점.
pub const TANK2_PERCENTAGE_HEIGHT: &[PercentagePoint] = &[
    pp(0.0, 0.0),
    pp(5.0, 121.1),
    pp(10.0, 242.2),
    pp(85.0, 2058.7),
    pp(90.0, 2179.8),
    pp(95.0, 2300.9),
    pp(100.0, 2960.0),
];

const fn cp(height_mm: f64, capacity_l: f64) -> CalibrationPoint {
    CalibrationPoint::new(height_mm, capacity_l)
}

const fn pp(percentage: f64, height_mm: f64) -> PercentagePoint {
    PercentagePoint::new(percentage, height_mm)
}
