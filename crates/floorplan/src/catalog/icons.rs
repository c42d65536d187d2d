//! Vector icons drawn on top of functional-area discs.
//!
//! Each path lives in its own coordinate system; the icon origin and scale
//! used to centre it on an item are declared next to it.

use floorplan_core::geometry::Point;

/// Placement of an icon path: scale and the path point that lands on the item centre.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub path: &'static str,
    pub scale: (f32, f32),
    pub origin: (f32, f32),
}

impl IconSpec {
    pub fn origin(&self) -> Point {
        Point::new(self.origin.0, self.origin.1)
    }
}

/// Coffee cup.
pub const COFFEE: IconSpec = IconSpec {
    path: "M374.7,358.984c-9.3,0-16.9,7.6-16.9,16.9s7.6,16.9,16.9,16.9,16.9-7.6,16.9-16.9-7.6-16.9-16.9-16.9ZM377.604,364.502l-.042-.043c-.222-.223-.222-.586,0-.809.222-.224.581-.224.802,0l.042.043c1.345,1.357,1.345,3.565,0,4.922-.438.441-.678,1.028-.678,1.652s.241,1.211.678,1.652c.222.224.222.586,0,.809-.111.112-.256.168-.401.168s-.29-.056-.401-.167c-.652-.657-1.011-1.531-1.011-2.461,0-.93.359-1.804,1.011-2.461.903-.911.903-2.393,0-3.304ZM374.321,364.502l-.042-.043c-.222-.223-.222-.586,0-.809.222-.224.581-.224.802,0l.042.043c.652.657,1.011,1.531,1.011,2.461s-.359,1.804-1.011,2.461c-.438.441-.678,1.028-.678,1.652s.241,1.211.678,1.652c.222.223.222.586,0,.809-.111.112-.256.168-.401.168s-.29-.056-.401-.168c-.652-.657-1.011-1.531-1.011-2.461s.359-1.804,1.011-2.461c.438-.441.678-1.028.678-1.652s-.241-1.211-.678-1.652ZM371.037,364.502l-.042-.043c-.222-.223-.222-.586,0-.809.222-.224.581-.224.802,0l.042.043c1.345,1.357,1.345,3.565,0,4.922-.438.441-.678,1.028-.678,1.652s.241,1.211.678,1.652c.222.223.222.586,0,.809-.111.112-.256.168-.401.168s-.29-.056-.401-.168c-.652-.657-1.011-1.531-1.011-2.461,0-.93.359-1.804,1.011-2.461.903-.911.903-2.393,0-3.304ZM386.3,385.679h-23.201c-.313,0-.567-.256-.567-.572s.254-.572.567-.572h6.73c-1.982-1.286-3.3-3.528-3.3-6.077v-3.878c0-.316.254-.572.567-.572h15.204c.313,0,.567.256.567.572v1.43h1.105c1.548,0,2.808,1.271,2.808,2.832s-1.26,2.832-2.808,2.832h-1.857c-.579,1.169-1.464,2.158-2.547,2.861h6.73c.313,0,.567.256.567.572s-.254.572-.567.572Z",
    scale: (0.8, 0.8),
    origin: (375.0, 375.0),
};

/// Restroom figures.
pub const BATHROOM: IconSpec = IconSpec {
    path: "M1030.117,394.786c9.267,0,16.778,7.511,16.778,16.778s-7.511,16.778-16.778,16.778-16.778-7.511-16.778-16.778,7.511-16.778,16.778-16.778h0ZM1022.318,423.852c.158.094.18.201.338.309.122.086.288.158.489.18.396.043.971.014,1.389.007h7.835l2.662-.007c.468-.058.619-.302.842-.568.173-.612.101-.64-.029-1.245-.086-.396-.209-.863-.266-1.252l-.784-3.626c.388-.043,3.763-.014,4.468-.014,1.014,0,2.813.266,2.806-1.727-.022-3.014-.014-6.029-.014-9.036-1.108.187-2.461.101-3.633.101h-3.763c-.043.489-.014,2.626-.014,3.281,0,1.036.043,2.166-.101,3.173-.331,2.324-1.475,4.144-3.065,5.54-.072.065-.129.108-.23.187-.151.122-.309.23-.482.36-1.856,1.345-4.302,1.777-6.612,1.554-.525-.05-.942-.173-1.432-.245-.173.317-.252,1.086-.345,1.489-.058.252-.115.489-.158.734-.086.446.058.496.101.806h0ZM1032.398,411.535h-15.281c-.144,2.338.669,4.482,2.216,6.123.288.302.741.676,1.13.935,1.568,1.058,2.842,1.446,4.871,1.446,1.309,0,2.417-.173,3.504-.669,3-1.374,4.95-4.381,4.712-7.835h-1.151ZM1037.7,399.175c-.324.266-.36.245-.525.748-.05,1.115.446.237.324,1.935l-2.964.007c-.475.079-.547.367-.547.871l.007,2.619c.137.705.777.547,1.504.547h6.209c.827-.007.719-.626.719-1.338,0-3.295.511-2.655-3.259-2.698-.029,0-.094,0-.122-.007l-.101-.029c-.007,0-.022-.007-.029-.014-.007-.799-.086-.82.108-1.079.101-.129.187-.317.209-.496.036-.281-.029-.568-.173-.755-.288-.381-.791-.532-1.36-.309h0ZM1029.808,410.557h2.374c.022-.863.144-1.691-.345-2.194-.209-.216-.216-.18-.475-.338l-.324-.101c-.324.079-1.827.029-2.273.029h-2.281c-1.532-.007-3.101-.022-4.633.007-.741.007-2.259-.137-2.784.201-.259.165-.525.518-.568.942s-.007.993-.007,1.453h11.317Z",
    scale: (0.8, 0.8),
    origin: (1030.0, 410.0),
};

/// Phone handset; the path is authored Y-up, hence the negative vertical scale.
pub const PHONEBOOTH: IconSpec = IconSpec {
    path: "M64 160C64 124.7 92.7 96 128 96L512 96C547.3 96 576 124.7 576 160L576 480C576 515.3 547.3 544 512 544L224 544L224 240C224 195.8 188.2 160 144 160L64 160zM312 384C325.3 384 336 373.3 336 360C336 346.7 325.3 336 312 336C298.7 336 288 346.7 288 360C288 373.3 298.7 384 312 384zM312 480C325.3 480 336 469.3 336 456C336 442.7 325.3 432 312 432C298.7 432 288 442.7 288 456C288 469.3 298.7 480 312 480zM424 360C424 346.7 413.3 336 400 336C386.7 336 376 346.7 376 360C376 373.3 386.7 384 400 384C413.3 384 424 373.3 424 360zM400 480C413.3 480 424 469.3 424 456C424 442.7 413.3 432 400 432C386.7 432 376 442.7 376 456C376 469.3 386.7 480 400 480zM512 360C512 346.7 501.3 336 488 336C474.7 336 464 346.7 464 360C464 373.3 474.7 384 488 384C501.3 384 512 373.3 512 360zM488 480C501.3 480 512 469.3 512 456C512 442.7 501.3 432 488 432C474.7 432 464 442.7 464 456C474.7 480 488 480zM320 160C302.3 160 288 174.3 288 192L288 224C288 241.7 302.3 256 320 256L480 256C497.7 256 512 241.7 512 224L512 192C512 174.3 497.7 160 480 160L320 160zM96 208L144 208C161.7 208 176 222.3 176 240L176 512C176 529.7 161.7 544 144 544L96 544C78.3 544 64 529.7 64 512L64 240C64 222.3 78.3 208 96 208z",
    scale: (0.06, -0.06),
    origin: (320.0, 320.0),
};
